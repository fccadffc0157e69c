// WAV header inspection
//
// Walks the RIFF chunk list until the `fmt ` chunk is found. Only chunk
// headers and the 2-byte format tag are read; payloads (the `data` chunk in
// particular) are skipped with seeks, so file size does not matter.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::riff::{ids, ChunkHeader, RiffHeader, RIFF_SIGNATURE};
use crate::utils::io::{read_le_u16, read_up_to};

use super::format::{FormatInfo, InspectReason};

/// Inspect the file at `path` and report its format tag and tag offset.
///
/// Only failing to open or read the file is an error. A file that is not a
/// RIFF/WAVE container, or whose chunk table is damaged, comes back as an
/// invalid [`FormatInfo`] with the matching [`InspectReason`].
pub fn inspect<P: AsRef<Path>>(path: P) -> Result<FormatInfo> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    let info = inspect_reader(&mut reader, len)?;
    debug!(
        path = %path.display(),
        reason = ?info.reason,
        format_tag = info.format_tag,
        tag_offset = ?info.tag_offset,
        "inspected"
    );
    Ok(info)
}

/// Inspect any seekable source holding `len` bytes of a candidate WAV file.
pub fn inspect_reader<R: Read + Seek>(reader: &mut R, len: u64) -> Result<FormatInfo> {
    reader.seek(SeekFrom::Start(0))?;

    let mut buffer = [0u8; RiffHeader::HEADER_SIZE];
    let read = read_up_to(reader, &mut buffer)?;

    if read < RIFF_SIGNATURE.len() || &buffer[0..4] != RIFF_SIGNATURE {
        return Ok(FormatInfo::invalid(InspectReason::NotRiff));
    }
    if read < RiffHeader::HEADER_SIZE {
        return Ok(FormatInfo::invalid(InspectReason::Truncated));
    }

    let header = match RiffHeader::parse(&buffer) {
        Some(header) => header,
        None => return Ok(FormatInfo::invalid(InspectReason::NotRiff)),
    };
    if !header.is_wave() {
        return Ok(FormatInfo::invalid(InspectReason::NotWave));
    }
    if header.size % 2 == 1 {
        debug!(riff_size = header.size, "odd RIFF size, final pad byte missing");
    }

    // Some writers leave the RIFF size at a placeholder, so the file length
    // bounds the walk as well.
    let limit = header.declared_end().min(len);
    let mut pos = RiffHeader::HEADER_SIZE as u64;

    while pos < limit {
        if pos + ChunkHeader::HEADER_SIZE > len {
            debug!(pos, len, "chunk header runs past end of file");
            return Ok(FormatInfo::invalid(InspectReason::Truncated));
        }

        reader.seek(SeekFrom::Start(pos))?;
        let chunk = ChunkHeader::read(reader)?;
        let payload_start = pos + ChunkHeader::HEADER_SIZE;

        if payload_start + chunk.length as u64 > len {
            debug!(
                chunk = %chunk.id_lossy(),
                length = chunk.length,
                pos,
                len,
                "chunk length runs past end of file"
            );
            return Ok(FormatInfo::invalid(InspectReason::Truncated));
        }

        if chunk.is(ids::FMT) {
            if chunk.length < 2 {
                return Ok(FormatInfo::invalid(InspectReason::Truncated));
            }
            let format_tag = read_le_u16(reader)?;
            return Ok(FormatInfo::found(format_tag, payload_start));
        }

        pos = payload_start + chunk.padded_length();
    }

    Ok(FormatInfo::invalid(InspectReason::NoFmtChunk))
}
