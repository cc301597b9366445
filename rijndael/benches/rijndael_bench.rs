use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime;

use rand::RngCore;
use rijndael::rijndael::cipher::{Rijndael, RIJNDAEL_BLOCK_SIZE};
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_types::{CipherInput, CipherMode, CipherOutput, PaddingMode};

const KEY: [u8; 16] = [
    0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6, 0xAB, 0xF7, 0x15, 0x88, 0x09, 0xCF, 0x4F,
    0x3C,
];
const PAYLOAD_SIZE: usize = 4 * 1024 * 1024;

fn context(mode: CipherMode) -> CipherContext {
    let iv = if mode == CipherMode::ECB {
        None
    } else {
        Some(vec![0x42u8; RIJNDAEL_BLOCK_SIZE])
    };
    CipherContext::new(
        Box::new(Rijndael::new(&KEY).unwrap()),
        mode,
        PaddingMode::Zeros,
        iv,
    )
    .unwrap()
}

fn bench_buffer_encryption(c: &mut Criterion) {
    let mut data = vec![0u8; PAYLOAD_SIZE];
    rand::rng().fill_bytes(&mut data);
    let rt = Runtime::new().unwrap();

    let mut group = c.benchmark_group("Buffer Encryption 4MiB");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60));
    group.throughput(Throughput::Bytes(PAYLOAD_SIZE as u64));

    for mode in [CipherMode::ECB, CipherMode::CBC, CipherMode::CTR] {
        let ctx = context(mode);
        group.bench_function(
            BenchmarkId::new("Rijndael Encrypt", format!("{:?}", mode)),
            |b| {
                b.to_async(&rt).iter(|| {
                    let ctx = ctx.clone();
                    let data = data.clone();
                    async move {
                        let mut output = CipherOutput::Buffer(Box::new(Vec::new()));
                        ctx.encrypt(CipherInput::Bytes(data), &mut output)
                            .await
                            .unwrap();
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_buffer_encryption);
criterion_main!(benches);
