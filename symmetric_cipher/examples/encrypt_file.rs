use std::fs;

use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_types::{CipherInput, CipherMode, CipherOutput, PaddingMode};
use symmetric_cipher::crypto::des::Des;

fn random_key(len: usize) -> Vec<u8> {
    use rand::RngCore;
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

#[tokio::main]
async fn main() -> symmetric_cipher::Result<()> {
    env_logger::init();

    let dir = tempfile::tempdir()?;
    let input = dir.path().join("sample.bin");

    // несколько мегабайт, чтобы задействовать потоковый путь
    let mut payload = Vec::with_capacity(3 * 1024 * 1024 + 11);
    while payload.len() < 3 * 1024 * 1024 + 11 {
        payload.extend_from_slice(b"streaming sample payload #");
    }
    payload.truncate(3 * 1024 * 1024 + 11);
    fs::write(&input, &payload)?;

    let modes = [
        CipherMode::ECB,
        CipherMode::CBC,
        CipherMode::CFB,
        CipherMode::OFB,
        CipherMode::CTR,
    ];

    let key = random_key(8);
    let iv = random_key(8);

    for mode in modes {
        let mode_name = format!("{mode:?}").to_lowercase();
        let encrypted_path = dir.path().join(format!("sample_{mode_name}.bin"));
        let decrypted_path = dir.path().join(format!("sample_{mode_name}_out.bin"));

        let iv = if mode == CipherMode::ECB {
            None
        } else {
            Some(iv.clone())
        };
        let context = CipherContext::new(Box::new(Des::new(&key)?), mode, PaddingMode::Zeros, iv)?;

        context
            .encrypt(
                CipherInput::File(input.to_string_lossy().into_owned()),
                &mut CipherOutput::File(encrypted_path.to_string_lossy().into_owned()),
            )
            .await?;
        println!(
            "DES {mode_name}: {} -> {} байт",
            payload.len(),
            fs::metadata(&encrypted_path)?.len()
        );

        context
            .decrypt(
                CipherInput::File(encrypted_path.to_string_lossy().into_owned()),
                &mut CipherOutput::File(decrypted_path.to_string_lossy().into_owned()),
            )
            .await?;

        assert_eq!(payload, fs::read(&decrypted_path)?);
        println!("DES {mode_name} OK");
    }

    Ok(())
}
