use num_bigint::BigUint;
use quickcheck::quickcheck;
use rsa::primality::{
    FermatTest, MillerRabinTest, PrimalityTest, SolovayStrassenTest, confidence_to_iterations,
};

fn testers() -> Vec<(&'static str, Box<dyn PrimalityTest>)> {
    vec![
        ("Fermat", Box::new(FermatTest)),
        ("SolovayStrassen", Box::new(SolovayStrassenTest)),
        ("MillerRabin", Box::new(MillerRabinTest)),
    ]
}

#[test]
fn test_all_testers_accept_small_primes() {
    for (name, test) in testers() {
        for p in [2u32, 3, 5, 7, 11, 13] {
            assert!(
                test.is_prime(&BigUint::from(p), 0.99),
                "{name} отверг простое {p}"
            );
        }
    }
}

#[test]
fn test_all_testers_reject_small_composites() {
    for (name, test) in testers() {
        for c in [4u32, 6, 9, 15, 21, 25, 27, 33, 35, 49] {
            assert!(
                !test.is_prime(&BigUint::from(c), 0.99),
                "{name} принял составное {c}"
            );
        }
    }
}

#[test]
fn test_driver_policy_for_degenerate_candidates() {
    for (name, test) in testers() {
        assert!(!test.is_prime(&BigUint::from(0u32), 0.99), "{name}: 0");
        assert!(!test.is_prime(&BigUint::from(1u32), 0.99), "{name}: 1");
        assert!(test.is_prime(&BigUint::from(2u32), 0.99), "{name}: 2");
        assert!(!test.is_prime(&BigUint::from(4u32), 0.99), "{name}: 4");
        assert!(!test.is_prime(&BigUint::from(100u32), 0.99), "{name}: 100");
    }
}

#[test]
fn test_single_iteration_always_accepts_primes() {
    for (name, test) in testers() {
        for p in [5u32, 7, 11, 101, 1009] {
            let n = BigUint::from(p);
            for _ in 0..50 {
                assert!(test.test_iteration(&n), "{name}: итерация отвергла {p}");
            }
        }
    }
}

#[test]
fn test_carmichael_number_documents_fermat_weakness() {
    // 561 = 3 * 11 * 17 — число Кармайкла: любое основание, взаимно
    // простое с n, проходит проверку Ферма
    let n = BigUint::from(561u32);

    assert!(!MillerRabinTest.is_prime(&n, 0.99));
    assert!(!SolovayStrassenTest.is_prime(&n, 0.99));

    let fermat = FermatTest;
    let fooled = (0..200).any(|_| fermat.test_iteration(&n));
    assert!(fooled, "отдельные итерации Ферма обязаны принимать 561");
}

#[test]
fn test_miller_rabin_large_prime() {
    let prime = BigUint::from(32416190071u64);
    assert!(MillerRabinTest.is_prime(&prime, 0.999));

    let composite = prime * BigUint::from(11u32);
    assert!(!MillerRabinTest.is_prime(&composite, 0.999));
}

#[test]
fn test_confidence_to_iterations() {
    assert_eq!(confidence_to_iterations(0.5), 2);
    assert_eq!(confidence_to_iterations(0.99), 100);
    assert!(confidence_to_iterations(0.999) >= confidence_to_iterations(0.99));
}

quickcheck! {
    fn prop_miller_rabin_rejects_odd_composites(a: u8, b: u8) -> bool {
        let p = BigUint::from(2u32 * a as u32 + 3);
        let q = BigUint::from(2u32 * b as u32 + 3);
        let n = p * q;
        !MillerRabinTest.is_prime(&n, 0.99)
    }

    fn prop_solovay_strassen_rejects_odd_composites(a: u8, b: u8) -> bool {
        let p = BigUint::from(2u32 * a as u32 + 3);
        let q = BigUint::from(2u32 * b as u32 + 3);
        let n = p * q;
        !SolovayStrassenTest.is_prime(&n, 0.99)
    }
}
