use num_bigint::BigUint;
use num_traits::One;

/// Факторизация Ферма по модулю n.
pub struct FermatAttack;

impl FermatAttack {
    /// Перебирает a от ceil(sqrt(n)) вверх до первого a, у которого
    /// a^2 - n является полным квадратом b^2; тогда n = (a-b)(a+b).
    /// Срабатывает быстро только при близких p и q, перебор не ограничен.
    pub fn attack(n: &BigUint) -> (BigUint, BigUint) {
        let mut a = n.sqrt();
        if &a * &a < *n {
            a += BigUint::one();
        }

        loop {
            let b2 = &a * &a - n;
            let b = b2.sqrt();
            if &b * &b == b2 {
                return (&a - &b, &a + &b);
            }
            a += BigUint::one();
        }
    }
}
