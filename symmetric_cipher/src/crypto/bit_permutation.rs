use bitvec::prelude::*;

use crate::crypto::errors::{CipherError, Result};

/// С какого конца входа считаются индексы таблицы.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrder {
    /// От первого (старшего) бита к последнему.
    Ascending,
    /// От последнего (младшего) бита к первому.
    Descending,
}

/// База нумерации индексов таблицы.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexBase {
    ZeroBased,
    OneBased,
}

/// Перестановка битов по таблице индексов.
///
/// i-й бит результата равен биту входа с индексом `table[i]`,
/// пересчитанным согласно базе и направлению нумерации. Биты внутри
/// байта считаются от старшего к младшему, результат упаковывается
/// так же, неполный последний байт дополняется нулями.
pub struct BitPermutation<'a> {
    table: &'a [usize],
    order: IndexOrder,
    base: IndexBase,
}

impl<'a> BitPermutation<'a> {
    /// Соглашение таблиц DES: нумерация с единицы от старшего бита.
    pub const fn new(table: &'a [usize]) -> Self {
        Self {
            table,
            order: IndexOrder::Ascending,
            base: IndexBase::OneBased,
        }
    }

    pub const fn with_layout(table: &'a [usize], order: IndexOrder, base: IndexBase) -> Self {
        Self { table, order, base }
    }

    pub fn permute(&self, data: &[u8]) -> Result<Vec<u8>> {
        let bits = data.view_bits::<Msb0>();
        let mut out = BitVec::<u8, Msb0>::with_capacity(self.table.len());
        for &position in self.table {
            out.push(bits[self.resolve(position, bits.len())?]);
        }
        Ok(out.into_vec())
    }

    fn resolve(&self, position: usize, bit_count: usize) -> Result<usize> {
        let out_of_range = || CipherError::PermutationIndex {
            index: position,
            bits: bit_count,
        };
        let offset = match self.base {
            IndexBase::ZeroBased => position,
            IndexBase::OneBased => match position.checked_sub(1) {
                Some(offset) => offset,
                None => return Err(out_of_range()),
            },
        };
        if offset >= bit_count {
            return Err(out_of_range());
        }
        Ok(match self.order {
            IndexOrder::Ascending => offset,
            IndexOrder::Descending => bit_count - 1 - offset,
        })
    }
}
