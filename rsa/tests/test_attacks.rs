use num_bigint::{BigUint, RandBigInt, ToBigInt};
use num_traits::{One, Zero};
use quickcheck::quickcheck;
use rand::thread_rng;
use rsa::attacks::{ContinuedFractionTerm, FermatAttack, WienerAttack};
use rsa::number_theory::{extended_gcd, gcd, mod_pow};
use rsa::primality::{MillerRabinTest, PrimalityTest};

fn gen_prime(bits: u64) -> BigUint {
    let mut rng = thread_rng();
    loop {
        let mut candidate = rng.gen_biguint(bits);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(0, true);
        if MillerRabinTest.is_prime(&candidate, 0.99) {
            return candidate;
        }
    }
}

/// e = d^-1 mod phi, нормализованный в [0, phi)
fn modular_inverse(d: &BigUint, phi: &BigUint) -> BigUint {
    let phi_int = phi.to_bigint().unwrap();
    let (_, x, _) = extended_gcd(&d.to_bigint().unwrap(), &phi_int);
    (((x % &phi_int) + &phi_int) % &phi_int).to_biguint().unwrap()
}

#[test]
fn test_fermat_attack_literal() {
    let n = BigUint::from(10403u32);
    let (p, q) = FermatAttack::attack(&n);
    assert_eq!(p, BigUint::from(101u32));
    assert_eq!(q, BigUint::from(103u32));
}

#[test]
fn test_fermat_attack_perfect_square() {
    let n = BigUint::from(10609u32);
    let (p, q) = FermatAttack::attack(&n);
    assert_eq!(p, BigUint::from(103u32));
    assert_eq!(q, BigUint::from(103u32));
}

#[test]
fn test_fermat_attack_close_primes() {
    let n = BigUint::from(10007u32) * BigUint::from(10009u32);
    let (p, q) = FermatAttack::attack(&n);
    assert_eq!(p, BigUint::from(10007u32));
    assert_eq!(q, BigUint::from(10009u32));
    assert_eq!(&p * &q, n);
}

#[test]
fn test_fermat_attack_prime_input_yields_trivial_factors() {
    // для простого n перебор доходит до a = (n+1)/2 и b = (n-1)/2
    let n = BigUint::from(11u32);
    let (p, q) = FermatAttack::attack(&n);
    assert_eq!(p, BigUint::one());
    assert_eq!(q, n);
}

#[test]
fn test_wiener_attack_literal() {
    let e = BigUint::from(17993u32);
    let n = BigUint::from(90581u32);

    let result = WienerAttack::attack(&e, &n).expect("малый d обязан находиться");
    assert_eq!(result.d, BigUint::from(5u32));
    assert_eq!(result.phi_n, BigUint::from(89964u32));

    // таблица накапливает все просмотренные подходящие дроби по порядку
    assert_eq!(
        result.convergents.first(),
        Some(&ContinuedFractionTerm {
            k: BigUint::zero(),
            d: BigUint::one(),
        })
    );
    assert!(result.convergents.contains(&ContinuedFractionTerm {
        k: BigUint::one(),
        d: BigUint::from(5u32),
    }));
    assert_eq!(result.convergents.len(), 2);
}

#[test]
fn test_wiener_attack_recovered_exponent_decrypts() {
    let e = BigUint::from(17993u32);
    let n = BigUint::from(90581u32);
    let result = WienerAttack::attack(&e, &n).unwrap();

    let message = BigUint::from(42u32);
    let ciphertext = mod_pow(&message, &e, &n);
    assert_eq!(mod_pow(&ciphertext, &result.d, &n), message);
}

#[test]
fn test_wiener_attack_known_keypair() {
    // p = 419, q = 541, d = 7 < n^(1/4) / 3 — ключ заведомо уязвим
    let p = BigUint::from(419u32);
    let q = BigUint::from(541u32);
    let n = &p * &q;
    let phi = (&p - BigUint::one()) * (&q - BigUint::one());
    assert_eq!(phi, BigUint::from(225720u32));

    let d = BigUint::from(7u32);
    let e = modular_inverse(&d, &phi);
    assert_eq!(e, BigUint::from(128983u32));

    let result = WienerAttack::attack(&e, &n).expect("атака обязана восстановить d = 7");
    assert_eq!(result.d, d);
    assert_eq!(result.phi_n, phi);
    assert_eq!(
        result.convergents.last(),
        Some(&ContinuedFractionTerm {
            k: BigUint::from(4u32),
            d: BigUint::from(7u32),
        })
    );
}

#[test]
fn test_wiener_attack_large_exponent_not_found() {
    // d = phi - 1 порядка n, подходящие дроби до него не доходят
    let p = BigUint::from(10007u32);
    let q = BigUint::from(30011u32);
    let n = &p * &q;
    let phi = (&p - BigUint::one()) * (&q - BigUint::one());
    let e = &phi - BigUint::one();
    assert!(e < n);

    assert!(WienerAttack::attack(&e, &n).is_none());
}

#[test]
fn test_wiener_attack_guards() {
    let n = BigUint::from(90581u32);
    assert!(WienerAttack::attack(&BigUint::zero(), &n).is_none());
    assert!(WienerAttack::attack(&BigUint::from(17993u32), &BigUint::one()).is_none());
    assert!(WienerAttack::attack(&BigUint::from(17993u32), &BigUint::zero()).is_none());
    assert!(WienerAttack::attack(&n, &n).is_none());
}

quickcheck! {
    fn prop_wiener_recovers_small_private_exponent(p_bits: u8, q_bits: u8) -> bool {
        let p = gen_prime(8 + u64::from(p_bits % 9));
        let q = gen_prime(8 + u64::from(q_bits % 9));
        if p == q {
            return true;
        }

        let n = &p * &q;
        let phi = (&p - BigUint::one()) * (&q - BigUint::one());
        let d = BigUint::from(3u32);
        if gcd(&d, &phi) != BigUint::one() {
            return true;
        }
        // граница Винера: при слишком разбалансированных p и q малый d
        // не обязан попадать в подходящие дроби
        if BigUint::from(12u32) * (&p + &q) >= n {
            return true;
        }

        let e = modular_inverse(&d, &phi);
        match WienerAttack::attack(&e, &n) {
            Some(result) => result.d == d,
            None => false,
        }
    }
}
