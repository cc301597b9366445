use crate::number_theory::mod_pow;
use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::thread_rng;

/// Тест Миллера-Рабина: n-1 = 2^s * d, d нечётно; последовательность
/// a^d, a^(2d), ..., a^(2^(s-1) d) обязана пройти через 1 или n-1.
pub struct MillerRabinTest;

impl PrimalityTest for MillerRabinTest {
    fn test_iteration(&self, n: &BigUint) -> bool {
        let one = BigUint::one();
        let two = BigUint::from(2u8);
        if *n <= BigUint::from(3u8) {
            return *n == two || *n == BigUint::from(3u8);
        }
        if n.is_even() {
            return false;
        }

        let upper = n - &one;
        let mut d = upper.clone();
        let mut s = 0u32;
        while d.is_even() {
            d >>= 1;
            s += 1;
        }

        let a = thread_rng().gen_biguint_range(&two, &upper);
        let mut x = mod_pow(&a, &d, n);

        if x == one || x == upper {
            return true;
        }

        // n нечётно, значит s >= 1
        for _ in 0..s - 1 {
            x = mod_pow(&x, &two, n);

            if x == upper {
                return true;
            }
            if x == one {
                return false;
            }
        }

        false
    }
}
