use symmetric_cipher::crypto::errors::{CipherError, Result};

use crate::gf::arithmetic::Gf256;

/// Пара таблиц подстановки: прямая и обратная к ней перестановка.
pub struct SboxPair {
    pub forward: [u8; 256],
    pub inverse: [u8; 256],
}

impl SboxPair {
    /// Строит S-box над заданным полем: S[i] = inverse(i) XOR 0x63.
    /// Обратная таблица строится как обратная перестановка прямой,
    /// поэтому inverse[forward[i]] == i для любого байта.
    ///
    /// Если у какого-то элемента нет обратного, модуль поля приводим
    /// и подстановка не определена.
    pub fn build(field: &Gf256) -> Result<Self> {
        let mut forward = [0u8; 256];
        for (i, entry) in forward.iter_mut().enumerate() {
            let inverted = field.inverse(i as u8).ok_or_else(|| {
                CipherError::Configuration(format!(
                    "модуль 0x{:X} приводим, S-box не определён",
                    field.modulus()
                ))
            })?;
            *entry = inverted ^ 0x63;
        }

        let mut inverse = [0u8; 256];
        for (i, &substituted) in forward.iter().enumerate() {
            inverse[substituted as usize] = i as u8;
        }

        Ok(SboxPair { forward, inverse })
    }
}
