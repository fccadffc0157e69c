// WAV header handling module
//
// Two steps per file, no state carried between them:
// 1. `inspect` walks the RIFF chunks and reports the `fmt ` tag and its offset
// 2. `patch` re-checks the tag at that offset and rewrites 0xFFFE to 0x0001

pub mod format;
pub mod patcher;
pub mod reader;

#[cfg(test)]
pub(crate) mod fixtures;

pub use format::{FormatInfo, FormatTag, InspectReason, PatchReason, PatchResult};
pub use patcher::{patch, patch_stream, try_patch, MIN_TAG_OFFSET};
pub use reader::{inspect, inspect_reader};
