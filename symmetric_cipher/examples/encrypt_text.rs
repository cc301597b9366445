use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_types::{CipherInput, CipherMode, CipherOutput, PaddingMode};
use symmetric_cipher::crypto::des::Des;

fn random_bytes(len: usize) -> Vec<u8> {
    use rand::RngCore;
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

fn take_buffer(output: CipherOutput) -> Vec<u8> {
    match output {
        CipherOutput::Buffer(buffer) => *buffer,
        CipherOutput::File(_) => unreachable!(),
    }
}

#[tokio::main]
async fn main() -> symmetric_cipher::Result<()> {
    env_logger::init();

    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!";
    let data = text.as_bytes().to_vec();

    let key = random_bytes(8);
    let iv = random_bytes(8);

    let modes = [
        CipherMode::ECB,
        CipherMode::CBC,
        CipherMode::CFB,
        CipherMode::OFB,
        CipherMode::CTR,
    ];

    for mode in modes {
        let iv = if mode == CipherMode::ECB {
            None
        } else {
            Some(iv.clone())
        };
        let context = CipherContext::new(Box::new(Des::new(&key)?), mode, PaddingMode::Zeros, iv)?;

        let mut encrypted_output = CipherOutput::Buffer(Box::new(Vec::new()));
        context
            .encrypt(CipherInput::Bytes(data.clone()), &mut encrypted_output)
            .await?;
        let encrypted = take_buffer(encrypted_output);

        let mut decrypted_output = CipherOutput::Buffer(Box::new(Vec::new()));
        context
            .decrypt(CipherInput::Bytes(encrypted.clone()), &mut decrypted_output)
            .await?;
        let decrypted = take_buffer(decrypted_output);

        assert!(decrypted.starts_with(data.as_slice()));
        println!(
            "DES {:?}+Zeros: {} байт -> {} байт, начало шифртекста {:02X?}",
            mode,
            data.len(),
            encrypted.len(),
            &encrypted[..8.min(encrypted.len())]
        );
    }

    // PKCS#7 восстанавливает исходную длину и на байтовом пути
    let context = CipherContext::new(
        Box::new(Des::new(&key)?),
        CipherMode::CBC,
        PaddingMode::PKCS7,
        Some(iv.clone()),
    )?;
    let mut encrypted_output = CipherOutput::Buffer(Box::new(Vec::new()));
    context
        .encrypt(CipherInput::Bytes(data.clone()), &mut encrypted_output)
        .await?;
    let encrypted = take_buffer(encrypted_output);

    let mut decrypted_output = CipherOutput::Buffer(Box::new(Vec::new()));
    context
        .decrypt(CipherInput::Bytes(encrypted), &mut decrypted_output)
        .await?;
    assert_eq!(take_buffer(decrypted_output), data);
    println!("DES CBC+PKCS7 OK");

    Ok(())
}
