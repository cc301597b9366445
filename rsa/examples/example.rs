use std::fs;

use num_bigint::BigUint;
use tempfile::tempdir;

use rsa::attacks::{FermatAttack, WienerAttack};
use rsa::{PrimalityType, RsaService};

fn main() -> rsa::Result<()> {
    env_logger::init();

    println!("=== Генерация ключей ===");
    let service = RsaService::new(PrimalityType::MillerRabin, 0.99, 128);
    let (n, e) = service.public_key();
    let (_, d) = service.private_key();
    println!("n = {n}\ne = {e}\nd = {d}");

    println!("\n=== Шифрование числа ===");
    let message = BigUint::from(42u32);
    let ciphertext = service.encrypt(&message)?;
    let decrypted = service.decrypt(&ciphertext);
    assert_eq!(decrypted, message);
    println!("{message} -> {ciphertext} -> {decrypted}");

    println!("\n=== Шифрование байтов ===");
    let data = b"top secret payload";
    let encrypted = service.encrypt_bytes(data)?;
    let restored = service.decrypt_bytes(&encrypted);
    assert_eq!(restored, data);
    println!(
        "{} байт -> {} байт шифртекста",
        data.len(),
        encrypted.len()
    );

    println!("\n=== Шифрование файла ===");
    let dir = tempdir()?;
    let input = dir.path().join("message.txt");
    let encrypted_path = dir.path().join("message.rsa");
    let output = dir.path().join("message.out");
    fs::write(&input, data)?;
    service.encrypt_file(&input, &encrypted_path)?;
    service.decrypt_file(&encrypted_path, &output)?;
    assert_eq!(fs::read(&output)?, data);
    println!("файл прошёл цикл шифрования без потерь");

    println!("\n=== Атака Ферма ===");
    let weak_n = BigUint::from(10403u32);
    let (p, q) = FermatAttack::attack(&weak_n);
    println!("n = {weak_n}: p = {p}, q = {q}");

    println!("\n=== Атака Винера ===");
    let weak_e = BigUint::from(17993u32);
    let weak_n = BigUint::from(90581u32);
    match WienerAttack::attack(&weak_e, &weak_n) {
        Some(result) => {
            println!(
                "(e, n) = ({weak_e}, {weak_n}): d = {}, phi = {}, просмотрено дробей: {}",
                result.d,
                result.phi_n,
                result.convergents.len()
            );
        }
        None => println!("малый показатель не найден"),
    }

    match WienerAttack::attack(&e, &n) {
        Some(result) => println!("сгенерированный ключ уязвим: d = {}", result.d),
        None => println!("сгенерированный ключ к атаке Винера не уязвим"),
    }

    Ok(())
}
