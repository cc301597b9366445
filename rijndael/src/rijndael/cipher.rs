use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::errors::{CipherError, Result};

use crate::gf::arithmetic::{Gf256, DEFAULT_MODULUS};
use crate::gf::irreducible::is_irreducible;
use crate::rijndael::key_schedule::expand_key;
use crate::rijndael::sbox::SboxPair;

pub const RIJNDAEL_BLOCK_SIZE: usize = 16;

/// Состояние шифра: четыре столбца по четыре байта,
/// state[c][r] соответствует байту блока с индексом 4*c + r.
type State = [[u8; 4]; 4];

fn block_to_state(block: &[u8]) -> State {
    let mut state = [[0u8; 4]; 4];
    for (c, column) in state.iter_mut().enumerate() {
        for (r, byte) in column.iter_mut().enumerate() {
            *byte = block[c * 4 + r];
        }
    }
    state
}

fn state_to_block(state: &State) -> Vec<u8> {
    let mut block = vec![0u8; RIJNDAEL_BLOCK_SIZE];
    for (c, column) in state.iter().enumerate() {
        for (r, &byte) in column.iter().enumerate() {
            block[c * 4 + r] = byte;
        }
    }
    block
}

fn add_round_key(state: &mut State, round_key: &[u8]) {
    for (c, column) in state.iter_mut().enumerate() {
        for (r, byte) in column.iter_mut().enumerate() {
            *byte ^= round_key[c * 4 + r];
        }
    }
}

/// Подстановка байтов; таблица задаёт направление, прямое или обратное.
fn sub_bytes(state: &mut State, table: &[u8; 256]) {
    for column in state.iter_mut() {
        for byte in column.iter_mut() {
            *byte = table[*byte as usize];
        }
    }
}

/// Строка r циклически сдвигается влево на r позиций.
fn shift_rows(state: &mut State) {
    let old = *state;
    for r in 1..4 {
        for c in 0..4 {
            state[c][r] = old[(c + r) % 4][r];
        }
    }
}

fn inv_shift_rows(state: &mut State) {
    let old = *state;
    for r in 1..4 {
        for c in 0..4 {
            state[c][r] = old[(c + 4 - r) % 4][r];
        }
    }
}

/// Умножение каждого столбца на MDS-матрицу с коэффициентами
/// {02, 03, 01, 01}.
fn mix_columns(state: &mut State, field: &Gf256) {
    for column in state.iter_mut() {
        let a = *column;
        column[0] = field.multiply(a[0], 0x02) ^ field.multiply(a[1], 0x03) ^ a[2] ^ a[3];
        column[1] = a[0] ^ field.multiply(a[1], 0x02) ^ field.multiply(a[2], 0x03) ^ a[3];
        column[2] = a[0] ^ a[1] ^ field.multiply(a[2], 0x02) ^ field.multiply(a[3], 0x03);
        column[3] = field.multiply(a[0], 0x03) ^ a[1] ^ a[2] ^ field.multiply(a[3], 0x02);
    }
}

/// Обратное перемешивание столбцов, коэффициенты {0E, 0B, 0D, 09}.
fn inv_mix_columns(state: &mut State, field: &Gf256) {
    for column in state.iter_mut() {
        let a = *column;
        column[0] = field.multiply(a[0], 0x0E)
            ^ field.multiply(a[1], 0x0B)
            ^ field.multiply(a[2], 0x0D)
            ^ field.multiply(a[3], 0x09);
        column[1] = field.multiply(a[0], 0x09)
            ^ field.multiply(a[1], 0x0E)
            ^ field.multiply(a[2], 0x0B)
            ^ field.multiply(a[3], 0x0D);
        column[2] = field.multiply(a[0], 0x0D)
            ^ field.multiply(a[1], 0x09)
            ^ field.multiply(a[2], 0x0E)
            ^ field.multiply(a[3], 0x0B);
        column[3] = field.multiply(a[0], 0x0B)
            ^ field.multiply(a[1], 0x0D)
            ^ field.multiply(a[2], 0x09)
            ^ field.multiply(a[3], 0x0E);
    }
}

fn encrypt_block_internal(
    block: &[u8],
    round_keys: &[Vec<u8>],
    field: &Gf256,
    sbox: &SboxPair,
) -> Vec<u8> {
    let mut state = block_to_state(block);
    let last = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[0]);
    for round in 1..last {
        sub_bytes(&mut state, &sbox.forward);
        shift_rows(&mut state);
        mix_columns(&mut state, field);
        add_round_key(&mut state, &round_keys[round]);
    }
    sub_bytes(&mut state, &sbox.forward);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[last]);

    state_to_block(&state)
}

fn decrypt_block_internal(
    block: &[u8],
    round_keys: &[Vec<u8>],
    field: &Gf256,
    sbox: &SboxPair,
) -> Vec<u8> {
    let mut state = block_to_state(block);
    let last = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[last]);
    inv_shift_rows(&mut state);
    sub_bytes(&mut state, &sbox.inverse);
    for round in (1..last).rev() {
        add_round_key(&mut state, &round_keys[round]);
        inv_mix_columns(&mut state, field);
        inv_shift_rows(&mut state);
        sub_bytes(&mut state, &sbox.inverse);
    }
    add_round_key(&mut state, &round_keys[0]);

    state_to_block(&state)
}

/// SP-сеть Rijndael над настраиваемым полем GF(2^8): начальное
/// сложение с ключом, затем раунды SubBytes, ShiftRows, MixColumns и
/// AddRoundKey, в последнем раунде без MixColumns. Расшифрование
/// применяет обратные шаги в обратном порядке, расходуя раундовые
/// ключи с конца.
pub struct Rijndael {
    field: Gf256,
    sbox: SboxPair,
    round_keys: Vec<Vec<u8>>,
}

impl Rijndael {
    /// Шифр над полем с модулем по умолчанию 0x11B.
    pub fn new(key: &[u8]) -> Result<Self> {
        Self::with_modulus(key, DEFAULT_MODULUS)
    }

    /// Шифр над полем с указанным модулем. Модуль обязан быть
    /// неприводимым полиномом степени 8.
    pub fn with_modulus(key: &[u8], modulus: u16) -> Result<Self> {
        if !is_irreducible(modulus) {
            return Err(CipherError::Configuration(format!(
                "модуль 0x{:X} не является неприводимым полиномом степени 8",
                modulus
            )));
        }
        let field = Gf256::new(modulus);
        let sbox = SboxPair::build(&field)?;
        let round_keys = expand_key(key, &field, &sbox)?;
        Ok(Rijndael {
            field,
            sbox,
            round_keys,
        })
    }

    fn check_block(block: &[u8]) -> Result<()> {
        if block.len() != RIJNDAEL_BLOCK_SIZE {
            return Err(CipherError::BlockLength {
                expected: RIJNDAEL_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        Ok(())
    }
}

impl BlockCipher for Rijndael {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        Self::check_block(block)?;
        Ok(encrypt_block_internal(
            block,
            &self.round_keys,
            &self.field,
            &self.sbox,
        ))
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        Self::check_block(block)?;
        Ok(decrypt_block_internal(
            block,
            &self.round_keys,
            &self.field,
            &self.sbox,
        ))
    }

    fn block_size(&self) -> usize {
        RIJNDAEL_BLOCK_SIZE
    }
}
