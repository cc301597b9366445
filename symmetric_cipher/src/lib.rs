pub mod crypto;

pub use crypto::cipher_context::CipherContext;
pub use crypto::cipher_traits::{BlockCipher, KeyExpansion, RoundFunction};
pub use crypto::cipher_types::{CipherInput, CipherMode, CipherOutput, PaddingMode};
pub use crypto::des::Des;
pub use crypto::errors::{CipherError, Result};
