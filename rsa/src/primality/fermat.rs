use crate::number_theory::mod_pow;
use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::thread_rng;

/// Тест Ферма: a^(n-1) ≡ 1 (mod n) для случайного основания a.
/// Числа Кармайкла проходят проверку при любом основании, взаимно
/// простом с n — известная слабость этого теста.
pub struct FermatTest;

impl PrimalityTest for FermatTest {
    fn test_iteration(&self, n: &BigUint) -> bool {
        if *n <= BigUint::from(3u8) {
            return *n == BigUint::from(2u8) || *n == BigUint::from(3u8);
        }

        let one = BigUint::one();
        let a = thread_rng().gen_biguint_range(&BigUint::from(2u8), &(n - &one));

        mod_pow(&a, &(n - &one), n) == one
    }
}
