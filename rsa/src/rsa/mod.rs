pub mod keygen;
pub mod rsa;

pub use keygen::{PrimalityType, RsaKeyGenerator, RsaKeyPair};
pub use rsa::RsaService;
