use crate::crypto::cipher_traits::RoundFunction;
use crate::crypto::errors::{CipherError, Result};
use std::sync::Arc;

/// Сбалансированная сеть Фейстеля.
///
/// Раунд: `L, R -> R, L xor F(R, k)`. После последнего раунда половины
/// меняются местами, поэтому расшифрование выполняется тем же
/// преобразованием с раундовыми ключами в обратном порядке.
pub struct FeistelNetwork {
    num_round: usize,
    round_function: Arc<dyn RoundFunction + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(num_round: usize, round_function: Arc<dyn RoundFunction + Send + Sync>) -> Self {
        Self {
            num_round,
            round_function,
        }
    }

    pub fn encrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Result<Vec<u8>> {
        self.run_rounds(block, round_keys.iter())
    }

    pub fn decrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Result<Vec<u8>> {
        self.run_rounds(block, round_keys.iter().rev())
    }

    fn run_rounds<'a, I>(&self, block: &[u8], round_keys: I) -> Result<Vec<u8>>
    where
        I: ExactSizeIterator<Item = &'a Vec<u8>>,
    {
        if block.len() % 2 != 0 {
            return Err(CipherError::Configuration(format!(
                "block of {} bytes cannot be split into halves",
                block.len()
            )));
        }
        if round_keys.len() != self.num_round {
            return Err(CipherError::Configuration(format!(
                "expected {} round keys, got {}",
                self.num_round,
                round_keys.len()
            )));
        }

        let (left, right) = block.split_at(block.len() / 2);
        let mut left = left.to_vec();
        let mut right = right.to_vec();

        for round_key in round_keys {
            let feistel_out = self.round_function.transform(&right, round_key)?;
            let new_right = left
                .iter()
                .zip(feistel_out.iter())
                .map(|(a, b)| a ^ b)
                .collect();
            left = right;
            right = new_right;
        }

        // Финальный обмен половин.
        Ok([right, left].concat())
    }
}
