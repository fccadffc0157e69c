// RIFF header and chunk header implementation

use std::io::Read;

use crate::utils::io::{read_fourcc, read_le_u32};

use super::{RIFF_SIGNATURE, WAVE_FORM};

/// The 12-byte header that opens every RIFF file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiffHeader {
    /// Declared size of everything after the size field
    pub size: u32,
    pub form_type: [u8; 4],
}

impl RiffHeader {
    pub const HEADER_SIZE: usize = 12;

    /// Parse a RIFF header from a 12-byte buffer.
    ///
    /// Returns `None` when the `RIFF` magic is absent.
    pub fn parse(buffer: &[u8; 12]) -> Option<Self> {
        if &buffer[0..4] != RIFF_SIGNATURE {
            return None;
        }

        let size = u32::from_le_bytes([buffer[4], buffer[5], buffer[6], buffer[7]]);
        let mut form_type = [0u8; 4];
        form_type.copy_from_slice(&buffer[8..12]);

        Some(RiffHeader { size, form_type })
    }

    pub fn is_wave(&self) -> bool {
        &self.form_type == WAVE_FORM
    }

    /// Absolute offset one past the last byte the header claims
    pub fn declared_end(&self) -> u64 {
        self.size as u64 + 8
    }
}

/// RIFF chunk header: a four-character id followed by a little-endian length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub length: u32,
}

impl ChunkHeader {
    pub const HEADER_SIZE: u64 = 8;

    /// Read chunk header from reader
    pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let id = read_fourcc(reader)?;
        let length = read_le_u32(reader)?;
        Ok(ChunkHeader { id, length })
    }

    pub fn is(&self, id: &[u8; 4]) -> bool {
        &self.id == id
    }

    /// Payload length rounded up to the word boundary
    pub fn padded_length(&self) -> u64 {
        let length = self.length as u64;
        length + (length & 1)
    }

    /// Chunk id as printable text, for log messages
    pub fn id_lossy(&self) -> String {
        String::from_utf8_lossy(&self.id).into_owned()
    }
}
