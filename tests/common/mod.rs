//! Shared helpers for building WAV files on disk

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const PCM: u16 = 0x0001;
pub const EXTENSIBLE: u16 = 0xFFFE;

/// Encode one RIFF chunk, padding odd payloads
pub fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(id);
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        bytes.push(0);
    }
    bytes
}

/// RIFF/WAVE container around the given chunks
pub fn wav(chunks: &[Vec<u8>]) -> Vec<u8> {
    let body = chunks.concat();
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&((body.len() + 4) as u32).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(&body);
    bytes
}

/// Extensible `fmt ` payload (40 bytes) unless `tag` says otherwise
pub fn fmt_payload(tag: u16) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&tag.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&48000u32.to_le_bytes());
    bytes.extend_from_slice(&288000u32.to_le_bytes());
    bytes.extend_from_slice(&6u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    if tag == EXTENSIBLE {
        bytes.extend_from_slice(&22u16.to_le_bytes());
        bytes.extend_from_slice(&24u16.to_le_bytes());
        bytes.extend_from_slice(&0x3u32.to_le_bytes());
        bytes.extend_from_slice(&[
            0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xAA, 0x00, 0x38,
            0x9B, 0x71,
        ]);
    }
    bytes
}

/// 44-byte header with a 16-byte `fmt ` chunk; tag at offset 20
pub fn minimal_wav(tag: u16) -> Vec<u8> {
    let mut fmt = fmt_payload(PCM);
    fmt[0..2].copy_from_slice(&tag.to_le_bytes());
    wav(&[chunk(b"fmt ", &fmt), chunk(b"data", &[])])
}

/// A realistic file: odd-length LIST, extensible fmt, audio data
pub fn tagged_wav(tag: u16) -> Vec<u8> {
    let samples: Vec<u8> = (0..600u32).map(|i| (i * 7 % 251) as u8).collect();
    wav(&[
        chunk(b"LIST", b"INFOISFT\x05\x00\x00\x00Lavf\x00"),
        chunk(b"fmt ", &fmt_payload(tag)),
        chunk(b"data", &samples),
    ])
}

pub fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, bytes).unwrap();
    path
}
