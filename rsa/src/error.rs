use thiserror::Error;

/// Ошибки подсистемы RSA.
#[derive(Debug, Error)]
pub enum RsaError {
    /// Аргумент вне области определения теоретико-числовой функции.
    #[error("domain error: {0}")]
    Domain(String),

    /// Сообщение как число не меньше модуля, преобразование необратимо.
    #[error("message of {message_bits} bits does not fit a modulus of {modulus_bits} bits")]
    MessageTooLarge { message_bits: u64, modulus_bits: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RsaError>;
