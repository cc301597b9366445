use crate::crypto::bit_permutation::BitPermutation;
use crate::crypto::cipher_traits::RoundFunction;
use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::errors::Result;
use bitvec::prelude::*;

/// Функция F: расширение E, сложение с раундовым ключом,
/// замена в S-блоках, перестановка P.
pub struct DesRoundFunction;

impl RoundFunction for DesRoundFunction {
    fn transform(&self, half_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>> {
        let expanded = BitPermutation::new(&E).permute(half_block)?;
        let mixed: Vec<u8> = expanded
            .iter()
            .zip(round_key.iter())
            .map(|(a, b)| a ^ b)
            .collect();

        let bits = mixed.view_bits::<Msb0>();
        let mut substituted = BitVec::<u8, Msb0>::with_capacity(32);
        for (box_index, s_box) in S_BOXES.iter().enumerate() {
            let group = &bits[box_index * 6..box_index * 6 + 6];

            // Крайние биты шестёрки задают строку, средние четыре - столбец
            let row = ((group[0] as usize) << 1) | group[5] as usize;
            let mut column = 0usize;
            for bit in &group[1..5] {
                column = (column << 1) | *bit as usize;
            }

            let value = s_box[row][column];
            for shift in (0..4).rev() {
                substituted.push((value >> shift) & 1 != 0);
            }
        }

        BitPermutation::new(&P).permute(&substituted.into_vec())
    }
}
