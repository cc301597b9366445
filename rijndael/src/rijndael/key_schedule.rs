use symmetric_cipher::crypto::cipher_traits::KeyExpansion;
use symmetric_cipher::crypto::errors::{CipherError, Result};

use crate::gf::arithmetic::Gf256;
use crate::rijndael::sbox::SboxPair;

/// Число раундов по длине ключа: 128, 192 и 256 бит.
pub fn rounds_for_key(key_len: usize) -> Result<usize> {
    match key_len {
        16 => Ok(10),
        24 => Ok(12),
        32 => Ok(14),
        _ => Err(CipherError::Configuration(format!(
            "ключ Rijndael должен быть 16, 24 или 32 байта, получено {}",
            key_len
        ))),
    }
}

/// Расширение ключа: (rounds + 1) раундовых ключей по 16 байт.
///
/// Первые четыре слова берутся из первых 16 байт ключа. Каждое
/// следующее слово есть XOR слова четырьмя позициями ранее с
/// предыдущим, причём на границе четвёрки предыдущее слово сначала
/// циклически сдвигается, проходит через S-box и складывается с
/// раундовой константой. Константы порождаются удвоением в поле
/// начиная с 0x01, так что расписание определено и для 12 и 14
/// раундов.
pub fn expand_key(key: &[u8], field: &Gf256, sbox: &SboxPair) -> Result<Vec<Vec<u8>>> {
    let rounds = rounds_for_key(key.len())?;
    let total_words = 4 * (rounds + 1);

    let mut words: Vec<[u8; 4]> = Vec::with_capacity(total_words);
    for chunk in key[..16].chunks_exact(4) {
        words.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut rcon: u8 = 0x01;
    for i in 4..total_words {
        let mut temp = words[i - 1];
        if i % 4 == 0 {
            temp.rotate_left(1);
            for byte in temp.iter_mut() {
                *byte = sbox.forward[*byte as usize];
            }
            temp[0] ^= rcon;
            rcon = field.multiply(rcon, 2);
        }
        let earlier = words[i - 4];
        words.push([
            earlier[0] ^ temp[0],
            earlier[1] ^ temp[1],
            earlier[2] ^ temp[2],
            earlier[3] ^ temp[3],
        ]);
    }

    Ok(words
        .chunks_exact(4)
        .map(|quad| quad.iter().flatten().copied().collect())
        .collect())
}

/// Обёртка расписания ключей Rijndael под общий трейт.
pub struct RijndaelKeyExpansion {
    field: Gf256,
    sbox: SboxPair,
}

impl RijndaelKeyExpansion {
    pub fn new(field: Gf256) -> Result<Self> {
        let sbox = SboxPair::build(&field)?;
        Ok(RijndaelKeyExpansion { field, sbox })
    }
}

impl KeyExpansion for RijndaelKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>> {
        expand_key(key, &self.field, &self.sbox)
    }
}
