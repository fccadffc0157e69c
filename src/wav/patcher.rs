// In-place WAV_EXTENSIBLE -> PCM tag rewrite
//
// The patch touches exactly the two bytes of the format tag. The extensible
// extension (cbSize, valid bits, channel mask, sub-format GUID) stays behind
// untouched; readers that see tag 1 ignore it, and no chunk length changes.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, WavError};
use crate::riff::{ChunkHeader, RiffHeader};
use crate::utils::io::{read_le_u16, write_le_u16_at};

use super::format::{FormatTag, PatchReason, PatchResult};

/// Earliest offset a `fmt ` payload can start at
pub const MIN_TAG_OFFSET: u64 = RiffHeader::HEADER_SIZE as u64 + ChunkHeader::HEADER_SIZE;

/// Rewrite the format tag at `tag_offset` from EXTENSIBLE to PCM.
///
/// `tag_offset` must come from [`crate::inspect`] on the same file. The tag
/// is re-read first; if it no longer holds 0xFFFE nothing is written and the
/// result reports [`PatchReason::AlreadyPcmOrOther`]. Errors are folded into
/// the returned [`PatchResult`]; use [`try_patch`] to propagate them.
pub fn patch<P: AsRef<Path>>(path: P, tag_offset: u64) -> PatchResult {
    let path = path.as_ref();
    match try_patch(path, tag_offset) {
        Ok(PatchReason::Ok) => PatchResult::patched(),
        Ok(_) => PatchResult::skipped(),
        Err(e) => {
            debug!(path = %path.display(), tag_offset, error = %e, "patch failed");
            let reason = match &e {
                WavError::InvalidOffset { .. } => PatchReason::InvalidOffset,
                _ => PatchReason::IoError,
            };
            PatchResult::failed(reason, e.to_string())
        }
    }
}

/// Error-propagating form of [`patch`].
///
/// Returns [`PatchReason::Ok`] after a write, [`PatchReason::AlreadyPcmOrOther`]
/// when the tag was not extensible.
pub fn try_patch<P: AsRef<Path>>(path: P, tag_offset: u64) -> Result<PatchReason> {
    let path = path.as_ref();
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;

    let reason = patch_stream(&mut file, tag_offset)?;
    match reason {
        PatchReason::Ok => {
            file.sync_data()?;
            info!(path = %path.display(), tag_offset, "patched WAV_EXTENSIBLE to PCM");
        }
        _ => debug!(path = %path.display(), tag_offset, "tag no longer extensible, left as is"),
    }
    Ok(reason)
}

/// Check-then-write on any seekable stream.
pub fn patch_stream<S: Read + Write + Seek>(stream: &mut S, tag_offset: u64) -> Result<PatchReason> {
    let len = stream.seek(SeekFrom::End(0))?;
    if tag_offset < MIN_TAG_OFFSET || tag_offset.saturating_add(2) > len {
        return Err(WavError::InvalidOffset { offset: tag_offset, len });
    }

    stream.seek(SeekFrom::Start(tag_offset))?;
    let current = read_le_u16(stream)?;
    if current != FormatTag::EXTENSIBLE {
        return Ok(PatchReason::AlreadyPcmOrOther);
    }

    write_le_u16_at(stream, tag_offset, FormatTag::PCM)?;
    stream.flush()?;
    Ok(PatchReason::Ok)
}
