use crate::crypto::cipher_types::PaddingMode;

/// Дополнение данных до кратности размеру блока.
///
/// Нулевое дополнение добавляется только к неполному блоку, поэтому
/// выровненные данные проходят без изменений. PKCS#7 добавляется
/// всегда: выровненные данные получают целый блок из байтов
/// `block_size`, длина дополнения лежит в пределах 1..=block_size.
pub fn apply_padding(mut data: Vec<u8>, block_size: usize, padding: PaddingMode) -> Vec<u8> {
    match padding {
        PaddingMode::Zeros => {
            let tail = data.len() % block_size;
            if tail != 0 {
                data.resize(data.len() + block_size - tail, 0);
            }
        }
        PaddingMode::PKCS7 => {
            let pad_len = block_size - data.len() % block_size;
            data.extend(vec![pad_len as u8; pad_len]);
        }
    }
    data
}

/// Снятие PKCS#7. Некорректное дополнение не считается ошибкой:
/// данные возвращаются без изменений.
pub fn remove_pkcs7(mut data: Vec<u8>) -> Vec<u8> {
    let Some(&last_byte) = data.last() else {
        return data;
    };
    let pad_len = last_byte as usize;
    if pad_len == 0 || pad_len > data.len() {
        return data;
    }
    if data[data.len() - pad_len..].iter().all(|&b| b == last_byte) {
        data.truncate(data.len() - pad_len);
    }
    data
}

/// Обрезка хвостовых нулей в пределах последнего блока. Применяется
/// файловым путём расшифровки при нулевом дополнении, где исходная
/// длина не сохраняется.
pub fn strip_trailing_zeros(data: &mut Vec<u8>, block_size: usize) {
    let floor = data.len().saturating_sub(block_size);
    while data.len() > floor && data.last() == Some(&0) {
        data.pop();
    }
}
