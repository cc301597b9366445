use crate::crypto::cipher_io::{read_chunk, write_all};
use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::{CipherInput, CipherMode, CipherOutput, PaddingMode};
use crate::crypto::errors::{CipherError, Result};
use crate::crypto::padding::{apply_padding, remove_pkcs7, strip_trailing_zeros};
use log::debug;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::mem;
use std::sync::Arc;

/// Размер порции при потоковой обработке файлов.
const CHUNK_SIZE: usize = 1024 * 1024;

/// Ниже этого объёма распараллеливание ECB и CTR не окупается.
const OPTIMAL_PARALLELISM_THRESHOLD: usize = 64 * 1024;

struct VecWriter<'a>(&'a mut Vec<u8>);

impl Write for VecWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Состояние сцепления, переносимое между порциями файла.
///
/// `prev` - для CBC/CFB/OFB блок обратной связи, для CTR неизменный
/// начальный счётчик. `block_offset` - число уже обработанных блоков.
struct ChainState {
    prev: Vec<u8>,
    block_offset: usize,
}

/// Контекст применения блочного шифра: режим сцепления, схема
/// дополнения и вектор инициализации.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn BlockCipher + Send + Sync>,
    mode: CipherMode,
    padding: PaddingMode,
    iv: Option<Vec<u8>>,
}

impl CipherContext {
    /// Всем режимам, кроме ECB, требуется вектор инициализации
    /// размером в один блок; его отсутствие или неверная длина
    /// отклоняются до начала обработки.
    pub fn new(
        algorithm: Box<dyn BlockCipher + Send + Sync>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<Self> {
        let algorithm: Arc<dyn BlockCipher + Send + Sync> = Arc::from(algorithm);
        if mode != CipherMode::ECB {
            match &iv {
                None => {
                    return Err(CipherError::Configuration(format!(
                        "{mode:?} mode requires an initialization vector"
                    )));
                }
                Some(iv) if iv.len() != algorithm.block_size() => {
                    return Err(CipherError::Configuration(format!(
                        "initialization vector must be {} bytes, got {}",
                        algorithm.block_size(),
                        iv.len()
                    )));
                }
                _ => {}
            }
        }
        Ok(CipherContext {
            algorithm,
            mode,
            padding,
            iv,
        })
    }

    pub async fn encrypt(&self, input: CipherInput, output: &mut CipherOutput) -> Result<()> {
        self.run(input, output, true).await
    }

    pub async fn decrypt(&self, input: CipherInput, output: &mut CipherOutput) -> Result<()> {
        self.run(input, output, false).await
    }

    async fn run(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
        encrypt: bool,
    ) -> Result<()> {
        match input {
            CipherInput::Bytes(data) => {
                let processed = self.process_data(&data, encrypt)?;
                write_all(output, &processed)?;
                Ok(())
            }
            CipherInput::File(input_path) => match output {
                CipherOutput::File(output_path) => {
                    let context = self.clone();
                    let output_path = output_path.clone();
                    run_file_task(move || {
                        let reader = BufReader::new(File::open(&input_path)?);
                        let mut writer = BufWriter::new(File::create(&output_path)?);
                        context.process_stream(reader, &mut writer, encrypt)?;
                        writer.flush()?;
                        Ok(())
                    })
                    .await
                }
                CipherOutput::Buffer(buffer) => {
                    let context = self.clone();
                    let processed = run_file_task(move || {
                        let reader = BufReader::new(File::open(&input_path)?);
                        let mut data = Vec::new();
                        context.process_stream(reader, &mut VecWriter(&mut data), encrypt)?;
                        Ok(data)
                    })
                    .await?;
                    **buffer = processed;
                    Ok(())
                }
            },
        }
    }

    /// Обработка данных в памяти. Дополнение применяется при
    /// шифровании; при расшифровании снимается только PKCS#7,
    /// поскольку нулевое дополнение неотличимо от значащих нулей.
    fn process_data(&self, data: &[u8], encrypt: bool) -> Result<Vec<u8>> {
        let mut state = self.initial_state();
        if encrypt {
            let padded = apply_padding(data.to_vec(), self.algorithm.block_size(), self.padding);
            self.process_blocks(&padded, &mut state, true)
        } else {
            let plain = self.process_blocks(data, &mut state, false)?;
            Ok(match self.padding {
                PaddingMode::PKCS7 => remove_pkcs7(plain),
                PaddingMode::Zeros => plain,
            })
        }
    }

    /// Потоковая обработка: порции по `CHUNK_SIZE` с переносом
    /// состояния сцепления между ними. При расшифровании последний
    /// прочитанный блок удерживается до следующего чтения, чтобы
    /// дополнение снималось именно с конца файла.
    fn process_stream<R: Read, W: Write>(
        &self,
        mut reader: R,
        writer: &mut W,
        encrypt: bool,
    ) -> Result<()> {
        let block_size = self.algorithm.block_size();
        let mut state = self.initial_state();
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut carry: Vec<u8> = Vec::new();
        let mut total = 0usize;

        loop {
            let read = read_chunk(&mut reader, &mut buffer)?;
            total += read;

            let mut pending = mem::take(&mut carry);
            pending.extend_from_slice(&buffer[..read]);

            if read < CHUNK_SIZE {
                let out = self.process_final(&pending, &mut state, encrypt)?;
                writer.write_all(&out)?;
                break;
            }

            let keep = if encrypt { 0 } else { block_size };
            let cut = pending.len() - keep;
            let out = self.process_blocks(&pending[..cut], &mut state, encrypt)?;
            writer.write_all(&out)?;
            carry = pending[cut..].to_vec();
        }

        debug!(
            "{} {} bytes in {:?} mode",
            if encrypt { "encrypted" } else { "decrypted" },
            total,
            self.mode
        );
        Ok(())
    }

    /// Последняя порция файла: здесь применяется и снимается дополнение.
    fn process_final(&self, data: &[u8], state: &mut ChainState, encrypt: bool) -> Result<Vec<u8>> {
        let block_size = self.algorithm.block_size();
        if encrypt {
            let padded = apply_padding(data.to_vec(), block_size, self.padding);
            self.process_blocks(&padded, state, true)
        } else {
            let mut plain = self.process_blocks(data, state, false)?;
            match self.padding {
                PaddingMode::PKCS7 => plain = remove_pkcs7(plain),
                PaddingMode::Zeros => strip_trailing_zeros(&mut plain, block_size),
            }
            Ok(plain)
        }
    }

    fn initial_state(&self) -> ChainState {
        ChainState {
            prev: self.iv.clone().unwrap_or_default(),
            block_offset: 0,
        }
    }

    fn process_blocks(&self, data: &[u8], state: &mut ChainState, encrypt: bool) -> Result<Vec<u8>> {
        let block_size = self.algorithm.block_size();
        match self.mode {
            CipherMode::ECB => self.process_ecb(data, encrypt),
            CipherMode::CTR => {
                let out = self.process_ctr(data, &state.prev, state.block_offset)?;
                state.block_offset += data.len().div_ceil(block_size);
                Ok(out)
            }
            _ => {
                let mut out = Vec::with_capacity(data.len());
                for block in data.chunks(block_size) {
                    out.extend(self.process_single_block(block, &mut state.prev, encrypt)?);
                }
                Ok(out)
            }
        }
    }

    /// Один шаг последовательных режимов. В CFB и OFB последний блок
    /// может быть неполным: гамма усекается до его длины.
    fn process_single_block(
        &self,
        block: &[u8],
        prev: &mut Vec<u8>,
        encrypt: bool,
    ) -> Result<Vec<u8>> {
        match self.mode {
            CipherMode::CBC => {
                if encrypt {
                    let mixed = xor_bytes(block, prev);
                    let encrypted = self.algorithm.encrypt_block(&mixed)?;
                    *prev = encrypted.clone();
                    Ok(encrypted)
                } else {
                    let decrypted = self.algorithm.decrypt_block(block)?;
                    let plain = xor_bytes(&decrypted, prev);
                    *prev = block.to_vec();
                    Ok(plain)
                }
            }
            CipherMode::CFB => {
                let gamma = self.algorithm.encrypt_block(prev)?;
                let out = xor_bytes(block, &gamma);
                *prev = if encrypt { out.clone() } else { block.to_vec() };
                Ok(out)
            }
            CipherMode::OFB => {
                let gamma = self.algorithm.encrypt_block(prev)?;
                *prev = gamma.clone();
                Ok(xor_bytes(block, &gamma))
            }
            CipherMode::ECB | CipherMode::CTR => unreachable!("handled without chaining state"),
        }
    }

    fn process_ecb(&self, data: &[u8], encrypt: bool) -> Result<Vec<u8>> {
        let block_size = self.algorithm.block_size();
        let span = self.parallel_span(data.len(), block_size);
        let parts: Vec<Vec<u8>> = data
            .par_chunks(span)
            .map(|part| {
                let mut out = Vec::with_capacity(part.len());
                for block in part.chunks(block_size) {
                    let processed = if encrypt {
                        self.algorithm.encrypt_block(block)?
                    } else {
                        self.algorithm.decrypt_block(block)?
                    };
                    out.extend(processed);
                }
                Ok(out)
            })
            .collect::<Result<_>>()?;
        Ok(parts.concat())
    }

    /// CTR: гамма от счётчика `IV + номер блока`. Шифрование и
    /// расшифрование совпадают, блоки независимы.
    fn process_ctr(&self, data: &[u8], iv: &[u8], block_offset: usize) -> Result<Vec<u8>> {
        let block_size = self.algorithm.block_size();
        let span = self.parallel_span(data.len(), block_size);
        let blocks_per_span = span / block_size;
        let parts: Vec<Vec<u8>> = data
            .par_chunks(span)
            .enumerate()
            .map(|(span_index, part)| {
                let mut out = Vec::with_capacity(part.len());
                let base = block_offset + span_index * blocks_per_span;
                for (block_index, block) in part.chunks(block_size).enumerate() {
                    let counter = offset_counter(iv, base + block_index);
                    let gamma = self.algorithm.encrypt_block(&counter)?;
                    out.extend(xor_bytes(block, &gamma));
                }
                Ok(out)
            })
            .collect::<Result<_>>()?;
        Ok(parts.concat())
    }

    /// Объём работы на поток; всегда кратен размеру блока.
    fn parallel_span(&self, data_len: usize, block_size: usize) -> usize {
        if data_len > OPTIMAL_PARALLELISM_THRESHOLD {
            let per_thread = data_len.div_ceil(rayon::current_num_threads());
            per_thread.next_multiple_of(block_size).min(CHUNK_SIZE)
        } else {
            data_len.max(block_size)
        }
    }
}

async fn run_file_task<F, T>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| CipherError::Io(std::io::Error::other(e)))?
}

fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// Счётчик CTR: вектор инициализации как целое в старшем порядке
/// байтов плюс смещение, перенос распространяется влево, переполнение
/// отбрасывается.
fn offset_counter(iv: &[u8], offset: usize) -> Vec<u8> {
    let mut counter = iv.to_vec();
    let mut carry = offset as u128;
    for byte in counter.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = *byte as u128 + (carry & 0xFF);
        *byte = sum as u8;
        carry = (carry >> 8) + (sum >> 8);
    }
    counter
}
