use crate::crypto::bit_permutation::BitPermutation;
use crate::crypto::cipher_traits::KeyExpansion;
use crate::crypto::des_tables::{PC1, PC2};
use crate::crypto::errors::{CipherError, Result};
use bitvec::prelude::*;

const SHIFT_BITS: [usize; 16] = [
    1, 1, 2, 2, 2, 2, 2, 2,
    1, 2, 2, 2, 2, 2, 2, 1,
];

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Result<Vec<Vec<u8>>> {
        if key.len() != 8 {
            return Err(CipherError::Configuration(format!(
                "DES key must be 8 bytes, got {}",
                key.len()
            )));
        }

        // 1) PC-1: из 64 бит ключа остаются 56 -> 7 байт
        let permuted = BitPermutation::new(&PC1).permute(key)?;
        let bits = permuted.view_bits::<Msb0>();

        // 2) Половины C и D по 28 бит
        let mut c = bits[..28].to_bitvec();
        let mut d = bits[28..].to_bitvec();

        // 3) На каждом раунде циклический сдвиг половин и сжатие PC-2
        let mut round_keys = Vec::with_capacity(SHIFT_BITS.len());
        for &shift in &SHIFT_BITS {
            c.rotate_left(shift);
            d.rotate_left(shift);

            let mut cd = BitVec::<u8, Msb0>::with_capacity(56);
            cd.extend_from_bitslice(&c);
            cd.extend_from_bitslice(&d);

            round_keys.push(BitPermutation::new(&PC2).permute(cd.as_raw_slice())?);
        }

        Ok(round_keys)
    }
}
