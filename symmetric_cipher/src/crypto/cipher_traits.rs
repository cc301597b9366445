use crate::crypto::errors::Result;

/// Выработка раундовых ключей из ключа шифрования.
pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>>;
}

/// Раундовое преобразование сети Фейстеля.
pub trait RoundFunction {
    fn transform(&self, half_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>>;
}

/// Блочный шифр с фиксированным размером блока и неизменяемым
/// расписанием ключей, выработанным при создании.
pub trait BlockCipher {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;
    fn block_size(&self) -> usize;
}
