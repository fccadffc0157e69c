// Format tag and inspection/patch result types

use serde::Serialize;

/// WAV format tag identifying the encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    /// PCM (uncompressed)
    Pcm,
    /// WAVE_FORMAT_EXTENSIBLE
    Extensible,
    /// Any other registered or unregistered tag
    Other(u16),
}

impl FormatTag {
    pub const PCM: u16 = 0x0001;
    pub const EXTENSIBLE: u16 = 0xFFFE;
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            FormatTag::PCM => FormatTag::Pcm,
            FormatTag::EXTENSIBLE => FormatTag::Extensible,
            other => FormatTag::Other(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => FormatTag::PCM,
            FormatTag::Extensible => FormatTag::EXTENSIBLE,
            FormatTag::Other(val) => val,
        }
    }
}

/// Why a file was or was not classified as a usable WAV container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InspectReason {
    Ok,
    NotRiff,
    NotWave,
    NoFmtChunk,
    Truncated,
}

impl std::fmt::Display for InspectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspectReason::Ok => write!(f, "ok"),
            InspectReason::NotRiff => write!(f, "not a RIFF file"),
            InspectReason::NotWave => write!(f, "RIFF file is not WAVE"),
            InspectReason::NoFmtChunk => write!(f, "no fmt chunk"),
            InspectReason::Truncated => write!(f, "truncated chunk table"),
        }
    }
}

impl InspectReason {
    /// Name used in JSON output, e.g. `NO_FMT_CHUNK`
    pub fn code(&self) -> String {
        serialized_name(self)
    }
}

/// Result of inspecting one file's header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatInfo {
    pub valid: bool,
    /// Raw tag; 0 when no `fmt ` chunk was read
    pub format_tag: u16,
    /// Absolute offset of the 2-byte tag field
    pub tag_offset: Option<u64>,
    pub reason: InspectReason,
}

impl FormatInfo {
    /// A well-formed file whose `fmt ` tag was read at `tag_offset`
    pub fn found(format_tag: u16, tag_offset: u64) -> Self {
        FormatInfo {
            valid: true,
            format_tag,
            tag_offset: Some(tag_offset),
            reason: InspectReason::Ok,
        }
    }

    pub fn invalid(reason: InspectReason) -> Self {
        debug_assert!(reason != InspectReason::Ok);
        FormatInfo {
            valid: false,
            format_tag: 0,
            tag_offset: None,
            reason,
        }
    }

    pub fn tag(&self) -> Option<FormatTag> {
        self.valid.then(|| FormatTag::from(self.format_tag))
    }

    /// Offset to hand to the patcher, if this file is patchable
    pub fn patchable_offset(&self) -> Option<u64> {
        match self.tag() {
            Some(FormatTag::Extensible) => self.tag_offset,
            _ => None,
        }
    }

    pub fn is_extensible(&self) -> bool {
        self.patchable_offset().is_some()
    }
}

/// Outcome of a patch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatchReason {
    Ok,
    /// The field no longer holds the extensible tag; nothing was written
    AlreadyPcmOrOther,
    IoError,
    /// The offset cannot address a format tag in this file
    InvalidOffset,
}

impl PatchReason {
    /// Name used in JSON output, e.g. `ALREADY_PCM_OR_OTHER`
    pub fn code(&self) -> String {
        serialized_name(self)
    }
}

// Unit variants serialize to their renamed string
fn serialized_name<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => name,
        _ => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchResult {
    pub patched: bool,
    pub reason: PatchReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PatchResult {
    pub fn patched() -> Self {
        PatchResult { patched: true, reason: PatchReason::Ok, message: None }
    }

    pub fn skipped() -> Self {
        PatchResult { patched: false, reason: PatchReason::AlreadyPcmOrOther, message: None }
    }

    pub fn failed(reason: PatchReason, message: String) -> Self {
        PatchResult { patched: false, reason, message: Some(message) }
    }
}
