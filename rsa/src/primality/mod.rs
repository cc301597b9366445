pub(crate) mod fermat;
pub(crate) mod miller_rabin;
pub(crate) mod solovay_strassen;
pub use fermat::FermatTest;
pub use miller_rabin::MillerRabinTest;
pub use solovay_strassen::SolovayStrassenTest;

use num_bigint::BigUint;
use num_integer::Integer;

/// Интерфейс для вероятностного теста простоты.
/// Шаблонный метод: общий драйвер `is_prime`, переопределяется одна итерация.
pub trait PrimalityTest {
    /// Одна рандомизированная итерация теста — реализуется в вариантах.
    /// false означает, что выбранный свидетель доказал составность n.
    fn test_iteration(&self, n: &BigUint) -> bool;

    /// Возвращает true, если n — вероятно простое с заданной вероятностью.
    /// n < 2 и чётные n > 2 отклоняются без итераций.
    fn is_prime(&self, n: &BigUint, min_probability: f64) -> bool {
        let two = BigUint::from(2u8);
        if *n < two {
            return false;
        }
        if *n == two {
            return true;
        }
        if n.is_even() {
            return false;
        }

        let iterations = confidence_to_iterations(min_probability);
        (0..iterations).all(|_| self.test_iteration(n))
    }
}

/// Количество итераций k = ceil(1 / (1 - p)).
/// Оценка не является точной границей: у Миллера-Рабина ошибка одной
/// итерации не превышает 1/4, то есть k здесь сильно завышен.
pub fn confidence_to_iterations(min_probability: f64) -> u32 {
    (1.0 / (1.0 - min_probability)).ceil() as u32
}
