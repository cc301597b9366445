/// Модуль поля по умолчанию: x^8 + x^4 + x^3 + x + 1 (как в AES).
pub const DEFAULT_MODULUS: u16 = 0x11B;

/// Поле Галуа GF(2^8) по заданному неприводимому полиному степени 8.
///
/// Элементы поля представлены байтами: бит i байта есть коэффициент
/// при x^i. Сложение поразрядный XOR, умножение полиномиальное с
/// приведением по модулю при каждом переполнении восьмого бита.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gf256 {
    modulus: u16,
}

impl Gf256 {
    pub fn new(modulus: u16) -> Self {
        Gf256 { modulus }
    }

    pub fn modulus(&self) -> u16 {
        self.modulus
    }

    /// Сложение элементов поля: XOR.
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Умножение элементов поля по заданному модулю.
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        let mut a = u16::from(a);
        let mut b = u16::from(b);
        let mut result = 0u16;
        while b > 0 {
            if b & 1 == 1 {
                result ^= a;
            }
            a <<= 1;
            if a & 0x100 != 0 {
                a ^= self.modulus;
            }
            a &= 0xFF;
            b >>= 1;
        }
        result as u8
    }

    /// Обратный элемент, найденный перебором 255 ненулевых кандидатов.
    /// Нулю сопоставляется ноль. `None` означает, что обратного нет,
    /// то есть модуль поля приводим.
    pub fn inverse(&self, a: u8) -> Option<u8> {
        if a == 0 {
            return Some(0);
        }
        (1..=255u8).find(|&candidate| self.multiply(a, candidate) == 1)
    }
}

impl Default for Gf256 {
    fn default() -> Self {
        Gf256::new(DEFAULT_MODULUS)
    }
}
