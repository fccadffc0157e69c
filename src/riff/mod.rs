// RIFF container support
//
// RIFF File Structure:
// - RIFF Header (12 bytes)
//   - Signature: "RIFF" (4 bytes)
//   - Size: total file size minus 8 (4 bytes, little-endian)
//   - Form Type: "WAVE" (4 bytes)
// - Chunks (variable count, any order)
//   - Id: four ASCII characters, e.g. "fmt ", "LIST", "JUNK", "data" (4 bytes)
//   - Length: payload size (4 bytes, little-endian)
//   - Payload (length bytes)
//   - Pad byte when length is odd

pub mod chunk;

pub use chunk::{ChunkHeader, RiffHeader};

pub const RIFF_SIGNATURE: &[u8; 4] = b"RIFF";
pub const WAVE_FORM: &[u8; 4] = b"WAVE";

/// Chunk ids
pub mod ids {
    pub const FMT: &[u8; 4] = b"fmt ";
    pub const DATA: &[u8; 4] = b"data";
    pub const LIST: &[u8; 4] = b"LIST";
    pub const JUNK: &[u8; 4] = b"JUNK";
}
