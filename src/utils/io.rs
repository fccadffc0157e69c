// I/O utilities for reading RIFF headers

use std::io::{Read, Seek, SeekFrom, Write};

/// Read little-endian 16-bit integer
pub fn read_le_u16<R: Read>(reader: &mut R) -> std::io::Result<u16> {
    let mut buffer = [0u8; 2];
    reader.read_exact(&mut buffer)?;
    Ok(u16::from_le_bytes(buffer))
}

/// Read little-endian 32-bit integer
pub fn read_le_u32<R: Read>(reader: &mut R) -> std::io::Result<u32> {
    let mut buffer = [0u8; 4];
    reader.read_exact(&mut buffer)?;
    Ok(u32::from_le_bytes(buffer))
}

/// Read a four-character code (chunk id, form type)
pub fn read_fourcc<R: Read>(reader: &mut R) -> std::io::Result<[u8; 4]> {
    let mut buffer = [0u8; 4];
    reader.read_exact(&mut buffer)?;
    Ok(buffer)
}

/// Write little-endian 16-bit integer at an absolute offset
pub fn write_le_u16_at<W: Write + Seek>(writer: &mut W, offset: u64, value: u16) -> std::io::Result<()> {
    writer.seek(SeekFrom::Start(offset))?;
    writer.write_all(&value.to_le_bytes())
}

/// Read into `buffer` until it is full or the reader hits EOF.
///
/// Returns the number of bytes read. Unlike `read_exact`, a short source is
/// not an error, which lets callers classify undersized files.
pub fn read_up_to<R: Read>(reader: &mut R, buffer: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
