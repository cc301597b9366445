#[cfg(test)]
mod tests {
    use symmetric_cipher::crypto::cipher_types::PaddingMode;
    use symmetric_cipher::crypto::padding::{apply_padding, remove_pkcs7, strip_trailing_zeros};

    #[test]
    fn zeros_pads_only_partial_blocks() {
        let padded = apply_padding(vec![1, 2, 3], 8, PaddingMode::Zeros);
        assert_eq!(padded, vec![1, 2, 3, 0, 0, 0, 0, 0]);

        let aligned = apply_padding(vec![7u8; 16], 8, PaddingMode::Zeros);
        assert_eq!(aligned.len(), 16);

        let empty = apply_padding(Vec::new(), 8, PaddingMode::Zeros);
        assert!(empty.is_empty());
    }

    #[test]
    fn pkcs7_always_pads() {
        let padded = apply_padding(vec![1, 2, 3], 8, PaddingMode::PKCS7);
        assert_eq!(padded, vec![1, 2, 3, 5, 5, 5, 5, 5]);

        // выровненные данные получают целый блок дополнения
        let aligned = apply_padding(vec![7u8; 8], 8, PaddingMode::PKCS7);
        assert_eq!(aligned.len(), 16);
        assert_eq!(&aligned[8..], &[8u8; 8]);

        let empty = apply_padding(Vec::new(), 16, PaddingMode::PKCS7);
        assert_eq!(empty, vec![16u8; 16]);
    }

    #[test]
    fn pkcs7_round_trip() {
        for len in 0..=33 {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = apply_padding(data.clone(), 16, PaddingMode::PKCS7);
            assert_eq!(padded.len() % 16, 0);
            assert_eq!(remove_pkcs7(padded), data);
        }
    }

    #[test]
    fn invalid_pkcs7_is_left_unchanged() {
        // последний байт нулевой
        let data = vec![1, 2, 3, 0];
        assert_eq!(remove_pkcs7(data.clone()), data);

        // заявленная длина больше самих данных
        let data = vec![1, 2, 200];
        assert_eq!(remove_pkcs7(data.clone()), data);

        // хвост не совпадает с заявленным байтом
        let data = vec![1, 2, 3, 2];
        assert_eq!(remove_pkcs7(data.clone()), data);

        assert!(remove_pkcs7(Vec::new()).is_empty());
    }

    #[test]
    fn zeros_strip_is_bounded_by_one_block() {
        let mut data = vec![9, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        strip_trailing_zeros(&mut data, 8);
        assert_eq!(data, vec![9, 0]);

        let mut short = vec![0, 0, 0];
        strip_trailing_zeros(&mut short, 8);
        assert!(short.is_empty());

        let mut no_tail = vec![1, 2, 3];
        strip_trailing_zeros(&mut no_tail, 8);
        assert_eq!(no_tail, vec![1, 2, 3]);
    }
}
