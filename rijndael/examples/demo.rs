use std::fs;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tempfile::tempdir;

use rijndael::gf::arithmetic::Gf256;
use rijndael::gf::irreducible::irreducible_degree8;
use rijndael::rijndael::cipher::{Rijndael, RIJNDAEL_BLOCK_SIZE};
use rijndael::rijndael::sbox::SboxPair;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::cipher_types::{CipherInput, CipherMode, CipherOutput, PaddingMode};

fn random_key(len: usize, rng: &mut impl RngCore) -> Vec<u8> {
    let mut buffer = vec![0u8; len];
    rng.fill_bytes(&mut buffer);
    buffer
}

#[tokio::main]
async fn main() -> symmetric_cipher::Result<()> {
    env_logger::init();

    let moduli = [(0x11Bu16, "0x11B (как в AES)"), (0x11D, "0x11D (альтернативный)")];

    println!("=== Неприводимые полиномы степени 8 ===");
    let irreducibles = irreducible_degree8();
    println!("всего {}: {:03X?}", irreducibles.len(), &irreducibles[..6]);

    println!("\n=== Арифметика GF(2^8) ===");
    for &(modulus, name) in &moduli {
        let field = Gf256::new(modulus);
        let inverse = field.inverse(0x57).unwrap();
        println!(
            "{}: 0x57 * 0x83 = {:#04X}, 0x57^-1 = {:#04X}",
            name,
            field.multiply(0x57, 0x83),
            inverse
        );
    }

    println!("\n=== S-box ===");
    for &(modulus, name) in &moduli {
        let sbox = SboxPair::build(&Gf256::new(modulus))?;
        println!("{}:", name);
        for x in [0x00u8, 0x53, 0x7F] {
            let y = sbox.forward[x as usize];
            assert_eq!(sbox.inverse[y as usize], x);
            println!("  S({:#04X}) = {:#04X}", x, y);
        }
    }

    println!("\n=== Шифрование блока ===");
    let mut rng = StdRng::seed_from_u64(0xDEAD_BEEF);
    let block = random_key(RIJNDAEL_BLOCK_SIZE, &mut rng);
    for &(modulus, name) in &moduli {
        for key_len in [16usize, 24, 32] {
            let key = random_key(key_len, &mut rng);
            let cipher = Rijndael::with_modulus(&key, modulus)?;
            let encrypted = cipher.encrypt_block(&block)?;
            let decrypted = cipher.decrypt_block(&encrypted)?;
            assert_eq!(decrypted, block);
            println!(
                "{}, ключ {} бит: {:02X?}...",
                name,
                key_len * 8,
                &encrypted[..4]
            );
        }
    }

    println!("\n=== Режимы шифрования ===");
    let data: Vec<u8> = (0..1024).map(|_| rng.next_u32() as u8).collect();
    let key = random_key(16, &mut rng);
    for mode in [
        CipherMode::ECB,
        CipherMode::CBC,
        CipherMode::CFB,
        CipherMode::OFB,
        CipherMode::CTR,
    ] {
        for padding in [PaddingMode::Zeros, PaddingMode::PKCS7] {
            let iv = if mode == CipherMode::ECB {
                None
            } else {
                Some(vec![0u8; RIJNDAEL_BLOCK_SIZE])
            };
            let ctx = CipherContext::new(Box::new(Rijndael::new(&key)?), mode, padding, iv)?;

            let mut encrypted = CipherOutput::Buffer(Box::new(Vec::new()));
            ctx.encrypt(CipherInput::Bytes(data.clone()), &mut encrypted)
                .await?;
            let ciphertext = match encrypted {
                CipherOutput::Buffer(buffer) => *buffer,
                CipherOutput::File(_) => unreachable!(),
            };

            let mut decrypted = CipherOutput::Buffer(Box::new(Vec::new()));
            ctx.decrypt(CipherInput::Bytes(ciphertext), &mut decrypted)
                .await?;
            let plaintext = match decrypted {
                CipherOutput::Buffer(buffer) => *buffer,
                CipherOutput::File(_) => unreachable!(),
            };
            assert_eq!(plaintext, data);
            println!("{:?} + {:?} OK", mode, padding);
        }
    }

    println!("\n=== Файл ===");
    let dir = tempdir()?;
    let plain_path = dir.path().join("plain.bin");
    let encrypted_path = dir.path().join("encrypted.bin");
    let decrypted_path = dir.path().join("decrypted.bin");

    let payload: Vec<u8> = (0..3 * 1024 * 1024 + 21).map(|_| rng.next_u32() as u8).collect();
    fs::write(&plain_path, &payload)?;

    let ctx = CipherContext::new(
        Box::new(Rijndael::new(&key)?),
        CipherMode::CBC,
        PaddingMode::PKCS7,
        Some(vec![0x42u8; RIJNDAEL_BLOCK_SIZE]),
    )?;

    ctx.encrypt(
        CipherInput::File(plain_path.to_str().unwrap().to_string()),
        &mut CipherOutput::File(encrypted_path.to_str().unwrap().to_string()),
    )
    .await?;
    ctx.decrypt(
        CipherInput::File(encrypted_path.to_str().unwrap().to_string()),
        &mut CipherOutput::File(decrypted_path.to_str().unwrap().to_string()),
    )
    .await?;

    assert_eq!(fs::read(&decrypted_path)?, payload);
    println!(
        "{} байт зашифровано и восстановлено (CBC + PKCS7)",
        payload.len()
    );

    Ok(())
}
