use std::fs;
use std::path::Path;

use log::debug;
use num_bigint::BigUint;

use crate::error::{Result, RsaError};
use crate::number_theory::mod_pow;
use crate::rsa::keygen::{PrimalityType, RsaKeyGenerator, RsaKeyPair};

/// Шифрование и расшифрование RSA поверх сгенерированной пары ключей.
/// Данные интерпретируются как одно big-endian число, которое обязано
/// быть строго меньше модуля n.
pub struct RsaService {
    keypair: RsaKeyPair,
}

impl RsaService {
    pub fn new(test_type: PrimalityType, confidence: f64, bit_length: usize) -> Self {
        let generator = RsaKeyGenerator::new(test_type, confidence, bit_length);
        let keypair = generator.generate_keypair();
        Self { keypair }
    }

    pub fn keypair(&self) -> &RsaKeyPair {
        &self.keypair
    }

    pub fn encrypt(&self, m: &BigUint) -> Result<BigUint> {
        if m >= &self.keypair.n {
            return Err(RsaError::MessageTooLarge {
                message_bits: m.bits(),
                modulus_bits: self.keypair.n.bits(),
            });
        }
        Ok(mod_pow(m, &self.keypair.e, &self.keypair.n))
    }

    pub fn decrypt(&self, ciphertext: &BigUint) -> BigUint {
        mod_pow(ciphertext, &self.keypair.d, &self.keypair.n)
    }

    /// Шифрует срез байтов, прочитанный как одно big-endian число.
    pub fn encrypt_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let message = BigUint::from_bytes_be(data);
        Ok(self.encrypt(&message)?.to_bytes_be())
    }

    /// Обратное преобразование. Ведущие нулевые байты исходного
    /// сообщения не восстанавливаются: число их не хранит.
    pub fn decrypt_bytes(&self, data: &[u8]) -> Vec<u8> {
        self.decrypt(&BigUint::from_bytes_be(data)).to_bytes_be()
    }

    pub fn encrypt_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        let data = fs::read(&input)?;
        let encrypted = self.encrypt_bytes(&data)?;
        fs::write(&output, &encrypted)?;
        debug!("encrypted {} bytes into {}", data.len(), encrypted.len());
        Ok(())
    }

    pub fn decrypt_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        let data = fs::read(&input)?;
        let decrypted = self.decrypt_bytes(&data);
        fs::write(&output, &decrypted)?;
        debug!("decrypted {} bytes into {}", data.len(), decrypted.len());
        Ok(())
    }

    pub fn public_key(&self) -> (BigUint, BigUint) {
        (self.keypair.n.clone(), self.keypair.e.clone())
    }

    pub fn private_key(&self) -> (BigUint, BigUint) {
        (self.keypair.n.clone(), self.keypair.d.clone())
    }
}
