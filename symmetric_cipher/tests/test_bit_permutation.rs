#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use symmetric_cipher::crypto::bit_permutation::{BitPermutation, IndexBase, IndexOrder};
    use symmetric_cipher::crypto::des_tables::{IP, IP_INV};
    use symmetric_cipher::crypto::errors::CipherError;

    #[test]
    fn one_based_identity_keeps_bytes() {
        let table: Vec<usize> = (1..=16).collect();
        let out = BitPermutation::new(&table).permute(&[0xA5, 0x3C]).unwrap();
        assert_eq!(out, vec![0xA5, 0x3C]);
    }

    #[test]
    fn zero_based_identity_keeps_bytes() {
        let table: Vec<usize> = (0..16).collect();
        let permutation =
            BitPermutation::with_layout(&table, IndexOrder::Ascending, IndexBase::ZeroBased);
        let out = permutation.permute(&[0xA5, 0x3C]).unwrap();
        assert_eq!(out, vec![0xA5, 0x3C]);
    }

    #[test]
    fn descending_order_reads_from_the_tail() {
        let table: Vec<usize> = (0..8).collect();
        let permutation =
            BitPermutation::with_layout(&table, IndexOrder::Descending, IndexBase::ZeroBased);
        let out = permutation.permute(&[0b1000_0001]).unwrap();
        assert_eq!(out, vec![0b1000_0001]);

        let out = permutation.permute(&[0b1100_0000]).unwrap();
        assert_eq!(out, vec![0b0000_0011]);
    }

    #[test]
    fn initial_and_final_des_permutations_cancel() {
        let block = hex!("01 23 45 67 89 AB CD EF");

        let forward = BitPermutation::new(&IP).permute(&block).unwrap();
        let back = BitPermutation::new(&IP_INV).permute(&forward).unwrap();
        assert_eq!(back, block.to_vec());

        let forward = BitPermutation::new(&IP_INV).permute(&block).unwrap();
        let back = BitPermutation::new(&IP).permute(&forward).unwrap();
        assert_eq!(back, block.to_vec());
    }

    #[test]
    fn output_length_follows_the_table() {
        // сжатие 8 бит до 3
        let table = [1usize, 8, 4];
        let out = BitPermutation::new(&table).permute(&[0b1001_1001]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out, vec![0b1110_0000]);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let table = [9usize];
        let err = BitPermutation::new(&table).permute(&[0xFF]).unwrap_err();
        assert!(matches!(
            err,
            CipherError::PermutationIndex { index: 9, bits: 8 }
        ));
    }

    #[test]
    fn zero_index_in_one_based_table_is_rejected() {
        let table = [0usize];
        assert!(BitPermutation::new(&table).permute(&[0xFF]).is_err());
    }
}
