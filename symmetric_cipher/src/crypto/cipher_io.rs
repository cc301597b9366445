use crate::crypto::cipher_types::CipherOutput;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

pub fn write_all(output: &mut CipherOutput, data: &[u8]) -> io::Result<()> {
    match output {
        CipherOutput::Buffer(buffer) => {
            buffer.clear();
            buffer.extend_from_slice(data);
            Ok(())
        }
        CipherOutput::File(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(data)?;
            writer.flush()?;
            Ok(())
        }
    }
}

/// Дочитывает буфер до отказа. Возвращённое значение меньше длины
/// буфера только на конце потока.
pub fn read_chunk<R: Read>(reader: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        let read = reader.read(&mut buffer[filled..])?;
        if read == 0 {
            break;
        }
        filled += read;
    }
    Ok(filled)
}
