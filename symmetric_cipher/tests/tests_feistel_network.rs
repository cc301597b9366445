#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use symmetric_cipher::crypto::cipher_traits::RoundFunction;
    use symmetric_cipher::crypto::errors::Result;
    use symmetric_cipher::crypto::feistel_network::FeistelNetwork;

    struct MockRoundFunction;

    impl RoundFunction for MockRoundFunction {
        fn transform(&self, half_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>> {
            Ok(half_block
                .iter()
                .zip(round_key.iter().cycle())
                .map(|(byte, key)| byte.wrapping_add(*key))
                .collect())
        }
    }

    #[test]
    fn single_round_swaps_halves() {
        let network = FeistelNetwork::new(1, Arc::new(MockRoundFunction));
        let round_keys = vec![vec![0x10u8]];

        // L=0x01, R=0x02: новый R = L xor F(R) = 0x01 xor 0x12 = 0x13,
        // после финального обмена блок начинается со старого R
        let out = network
            .encrypt_with_round_keys(&[0x01, 0x02], &round_keys)
            .unwrap();
        assert_eq!(out, vec![0x13, 0x02]);

        let back = network
            .decrypt_with_round_keys(&out, &round_keys)
            .unwrap();
        assert_eq!(back, vec![0x01, 0x02]);
    }

    #[test]
    fn sixteen_rounds_round_trip() {
        let network = FeistelNetwork::new(16, Arc::new(MockRoundFunction));
        let round_keys: Vec<Vec<u8>> = (0..16u8).map(|i| vec![i, i.wrapping_mul(7)]).collect();
        let block = [0xAA, 0xBB, 0xCC, 0xDD];

        let encrypted = network.encrypt_with_round_keys(&block, &round_keys).unwrap();
        assert_ne!(encrypted, block.to_vec());

        let decrypted = network
            .decrypt_with_round_keys(&encrypted, &round_keys)
            .unwrap();
        assert_eq!(decrypted, block.to_vec());
    }

    #[test]
    fn odd_block_is_rejected() {
        let network = FeistelNetwork::new(1, Arc::new(MockRoundFunction));
        assert!(network
            .encrypt_with_round_keys(&[0x01, 0x02, 0x03], &[vec![0u8]])
            .is_err());
    }

    #[test]
    fn round_key_count_must_match() {
        let network = FeistelNetwork::new(4, Arc::new(MockRoundFunction));
        let err = network
            .encrypt_with_round_keys(&[0x01, 0x02], &vec![vec![0u8]; 3])
            .unwrap_err();
        assert!(err.to_string().contains("round keys"));
    }
}
