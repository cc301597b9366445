use crate::number_theory::{jacobi_symbol, mod_pow};
use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt, ToBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::thread_rng;

/// Тест Соловея-Штрассена: сравнение a^((n-1)/2) с символом Якоби (a|n).
pub struct SolovayStrassenTest;

impl PrimalityTest for SolovayStrassenTest {
    fn test_iteration(&self, n: &BigUint) -> bool {
        let two = BigUint::from(2u8);
        if *n <= BigUint::from(3u8) {
            return *n == two || *n == BigUint::from(3u8);
        }
        if n.is_even() {
            return false;
        }

        let one = BigUint::one();
        let a = thread_rng().gen_biguint_range(&two, &(n - &one));

        // n проверено на нечётность, символ Якоби определён
        let jacobi = match jacobi_symbol(&a.to_bigint().unwrap(), &n.to_bigint().unwrap()) {
            Ok(symbol) => symbol,
            Err(_) => return false,
        };
        if jacobi == 0 {
            return false;
        }

        let exp = (n - &one) >> 1;
        let x = mod_pow(&a, &exp, n);

        let expected = if jacobi == -1 { n - &one } else { one };
        x == expected
    }
}
