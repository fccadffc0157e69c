//! wavpatcher - find WAV_EXTENSIBLE headers and patch them to plain PCM
//!
//! Some playback hardware refuses WAV files whose `fmt ` chunk carries the
//! WAVE_FORMAT_EXTENSIBLE tag (0xFFFE) even when the audio is ordinary PCM.
//! This crate locates the tag by walking the RIFF chunk list and rewrites
//! the two tag bytes to 0x0001 in place. Nothing else in the file changes.
//!
//! ```no_run
//! let info = wavpatcher::inspect("take1.wav")?;
//! if let Some(offset) = info.patchable_offset() {
//!     let result = wavpatcher::patch("take1.wav", offset);
//!     assert!(result.patched);
//! }
//! # Ok::<(), wavpatcher::WavError>(())
//! ```

pub mod batch;
pub mod error;
pub mod riff;
pub mod wav;

mod utils;

#[cfg(feature = "python")]
mod python;

pub use batch::{discover, process_file, FileOutcome, FileReport, Mode, Summary, WAV_PATTERN};
pub use error::{Result, WavError};
pub use wav::{
    inspect, inspect_reader, patch, patch_stream, try_patch, FormatInfo, FormatTag, InspectReason,
    PatchReason, PatchResult,
};
