//! Проверка неприводимости полиномов над GF(2).
//!
//! Полином степени 8 приводим тогда и только тогда, когда у него есть
//! делитель степени от 1 до 4, поэтому достаточно пробного деления на
//! все полиномы из этого диапазона.

/// Степень полинома. Вызывается только для ненулевых значений.
fn degree(poly: u16) -> u32 {
    15 - poly.leading_zeros()
}

/// Остаток от деления полиномов над GF(2).
fn poly_rem(poly: u16, divisor: u16) -> u16 {
    let divisor_degree = degree(divisor);
    let mut rem = poly;
    while rem != 0 && degree(rem) >= divisor_degree {
        rem ^= divisor << (degree(rem) - divisor_degree);
    }
    rem
}

/// Неприводим ли полином степени 8 над GF(2).
/// Значения вне диапазона 0x100..=0x1FF не являются полиномами
/// степени 8 и отвергаются сразу.
pub fn is_irreducible(poly: u16) -> bool {
    if !(0x100..=0x1FF).contains(&poly) {
        return false;
    }
    (2..=0x1F).all(|divisor| poly_rem(poly, divisor) != 0)
}

/// Все 30 неприводимых полиномов степени 8.
pub fn irreducible_degree8() -> Vec<u16> {
    (0x100..=0x1FF).filter(|&poly| is_irreducible(poly)).collect()
}
