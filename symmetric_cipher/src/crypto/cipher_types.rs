/// Режим сцепления блоков.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    ECB,
    CBC,
    CFB,
    OFB,
    CTR,
}

/// Схема дополнения последнего блока.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    /// Дополнение нулями только неполного блока.
    Zeros,
    /// PKCS#7: дополнение добавляется всегда, в том числе целым блоком.
    PKCS7,
}

/// Источник данных для шифрования.
pub enum CipherInput {
    Bytes(Vec<u8>),
    File(String),
}

/// Приёмник результата.
pub enum CipherOutput {
    Buffer(Box<Vec<u8>>),
    File(String),
}
