// In-memory WAV images for unit tests

use crate::riff::ids;

/// Encode one chunk, adding the pad byte for odd payloads
pub(crate) fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + payload.len() + 1);
    bytes.extend_from_slice(id);
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        bytes.push(0);
    }
    bytes
}

/// Wrap encoded chunks in a RIFF/WAVE header with a consistent size field
pub(crate) fn wav(chunks: &[Vec<u8>]) -> Vec<u8> {
    let body: Vec<u8> = chunks.concat();
    let mut bytes = Vec::with_capacity(12 + body.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&((body.len() + 4) as u32).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(&body);
    bytes
}

/// 16-byte `fmt ` payload: stereo, 44.1 kHz, 16-bit
pub(crate) fn fmt_payload(tag: u16) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(16);
    bytes.extend_from_slice(&tag.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&44100u32.to_le_bytes());
    bytes.extend_from_slice(&176400u32.to_le_bytes());
    bytes.extend_from_slice(&4u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes
}

/// 40-byte WAVE_FORMAT_EXTENSIBLE payload with a PCM sub-format GUID
pub(crate) fn extensible_fmt() -> Vec<u8> {
    let mut bytes = fmt_payload(0xFFFE);
    bytes.extend_from_slice(&22u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(&0x3u32.to_le_bytes());
    bytes.extend_from_slice(&[
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xAA, 0x00, 0x38, 0x9B,
        0x71,
    ]);
    bytes
}

/// Canonical 44-byte header: `fmt ` at 12 (tag at 20), empty `data` at 36
pub(crate) fn minimal_wav(tag: u16) -> Vec<u8> {
    wav(&[chunk(ids::FMT, &fmt_payload(tag)), chunk(ids::DATA, &[])])
}
