use crate::crypto::bit_permutation::BitPermutation;
use crate::crypto::cipher_traits::{BlockCipher, KeyExpansion};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_round_function::DesRoundFunction;
use crate::crypto::des_tables::{IP, IP_INV};
use crate::crypto::errors::{CipherError, Result};
use crate::crypto::feistel_network::FeistelNetwork;
use std::sync::Arc;

pub const DES_BLOCK_SIZE: usize = 8;

/// DES над 64-битным блоком: IP, 16 раундов сети Фейстеля, IP^-1.
/// Расписание ключей вырабатывается при создании и не меняется.
pub struct Des {
    feistel_network: FeistelNetwork,
    round_keys: Vec<Vec<u8>>,
}

impl Des {
    pub fn new(key: &[u8]) -> Result<Self> {
        let round_keys = DesKeyExpansion.generate_round_keys(key)?;
        let feistel_network = FeistelNetwork::new(round_keys.len(), Arc::new(DesRoundFunction));
        Ok(Des {
            feistel_network,
            round_keys,
        })
    }

    fn check_block(block: &[u8]) -> Result<()> {
        if block.len() != DES_BLOCK_SIZE {
            return Err(CipherError::BlockLength {
                expected: DES_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        Ok(())
    }
}

impl BlockCipher for Des {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        Self::check_block(block)?;
        let permuted = BitPermutation::new(&IP).permute(block)?;
        let mixed = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, &self.round_keys)?;
        BitPermutation::new(&IP_INV).permute(&mixed)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        Self::check_block(block)?;
        let permuted = BitPermutation::new(&IP).permute(block)?;
        let mixed = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, &self.round_keys)?;
        BitPermutation::new(&IP_INV).permute(&mixed)
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }
}
