pub mod gf;
pub mod rijndael;

pub use gf::arithmetic::{Gf256, DEFAULT_MODULUS};
pub use rijndael::cipher::{Rijndael, RIJNDAEL_BLOCK_SIZE};
