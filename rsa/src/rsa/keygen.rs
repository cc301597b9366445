use log::debug;
use num_bigint::{BigUint, RandBigInt, ToBigInt};
use num_traits::One;
use rand::thread_rng;

use crate::number_theory::{extended_gcd, gcd};
use crate::primality::{FermatTest, MillerRabinTest, PrimalityTest, SolovayStrassenTest};

/// Выбор теста простоты
pub enum PrimalityType {
    Fermat,
    SolovayStrassen,
    MillerRabin,
}

/// Структура открытого и закрытого ключа RSA
pub struct RsaKeyPair {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    #[doc(hidden)]
    pub(crate) p: BigUint,
    #[doc(hidden)]
    pub(crate) q: BigUint,
}

impl RsaKeyPair {
    #[doc(hidden)]
    pub fn get_p(&self) -> &BigUint {
        &self.p
    }

    #[doc(hidden)]
    pub fn get_q(&self) -> &BigUint {
        &self.q
    }

    /// Открытый ключ (e, n) в виде big-endian байтов.
    pub fn public_key_bytes(&self) -> (Vec<u8>, Vec<u8>) {
        (self.e.to_bytes_be(), self.n.to_bytes_be())
    }

    /// Закрытый ключ (d, n) в виде big-endian байтов.
    pub fn private_key_bytes(&self) -> (Vec<u8>, Vec<u8>) {
        (self.d.to_bytes_be(), self.n.to_bytes_be())
    }
}

/// Сервис генерации ключей RSA
pub struct RsaKeyGenerator {
    test_type: PrimalityType,
    confidence: f64,
    bit_length: usize,
}

impl RsaKeyGenerator {
    /// Создание нового генератора
    pub fn new(test_type: PrimalityType, confidence: f64, bit_length: usize) -> Self {
        Self { test_type, confidence, bit_length }
    }

    /// Генерация пары ключей RSA
    pub fn generate_keypair(&self) -> RsaKeyPair {
        let test = self.get_test();
        let one = BigUint::one();

        let p = self.generate_prime(test.as_ref());
        let q = self.generate_prime(test.as_ref());
        let n = &p * &q;
        let phi = (&p - &one) * (&q - &one);

        let mut e = BigUint::from(65537u32);
        while gcd(&e, &phi) != one {
            e += 2u8;
        }

        let phi_int = phi.to_bigint().unwrap();
        let (_, d, _) = extended_gcd(&e.to_bigint().unwrap(), &phi_int);
        let d = (((d % &phi_int) + &phi_int) % &phi_int).to_biguint().unwrap();

        debug!("keypair ready: n has {} bits, e = {}", n.bits(), e);
        RsaKeyPair { n, e, d, p, q }
    }

    /// Случайный кандидат половинной битовой длины со взведёнными
    /// старшим и младшим битами, пока тест простоты его не примет
    fn generate_prime(&self, test: &dyn PrimalityTest) -> BigUint {
        let half_bits = (self.bit_length / 2) as u64;
        let mut rng = thread_rng();
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let mut candidate = rng.gen_biguint(half_bits);
            candidate.set_bit(half_bits - 1, true);
            candidate.set_bit(0, true);
            if test.is_prime(&candidate, self.confidence) {
                debug!("prime of {} bits found after {} attempts", half_bits, attempts);
                return candidate;
            }
        }
    }

    /// Получение экземпляра теста простоты по выбору пользователя
    fn get_test(&self) -> Box<dyn PrimalityTest> {
        match self.test_type {
            PrimalityType::Fermat => Box::new(FermatTest),
            PrimalityType::SolovayStrassen => Box::new(SolovayStrassenTest),
            PrimalityType::MillerRabin => Box::new(MillerRabinTest),
        }
    }
}
