use thiserror::Error;

/// Ошибки блочных шифров и режимов их применения.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Блок имеет длину, отличную от размера блока шифра.
    #[error("block must be exactly {expected} bytes, got {actual}")]
    BlockLength { expected: usize, actual: usize },

    /// Некорректная конфигурация: ключ, режим или вектор инициализации.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Индекс в таблице перестановки выходит за пределы входа.
    #[error("permutation index {index} is out of range for an input of {bits} bits")]
    PermutationIndex { index: usize, bits: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CipherError>;
