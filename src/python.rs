// Python bindings (feature "python")

use pyo3::exceptions::PyIOError;
use pyo3::prelude::*;

use crate::wav;
use crate::WavError;

impl From<WavError> for PyErr {
    fn from(e: WavError) -> Self {
        PyIOError::new_err(e.to_string())
    }
}

/// wavpatcher - scan and patch WAV_EXTENSIBLE headers
#[pymodule]
fn wavpatcher(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<FormatInfo>()?;
    m.add_class::<PatchResult>()?;
    m.add_function(wrap_pyfunction!(inspect, m)?)?;
    m.add_function(wrap_pyfunction!(patch, m)?)?;
    Ok(())
}

/// Header inspection result
#[pyclass(frozen)]
pub struct FormatInfo {
    #[pyo3(get)]
    valid: bool,
    #[pyo3(get)]
    format_tag: u16,
    #[pyo3(get)]
    tag_offset: Option<u64>,
    #[pyo3(get)]
    reason: String,
}

#[pymethods]
impl FormatInfo {
    fn is_extensible(&self) -> bool {
        self.valid && self.format_tag == wav::FormatTag::EXTENSIBLE
    }

    fn __repr__(&self) -> String {
        format!(
            "FormatInfo(valid={}, format_tag={}, tag_offset={:?}, reason={})",
            self.valid, self.format_tag, self.tag_offset, self.reason
        )
    }
}

/// Patch attempt result
#[pyclass(frozen)]
pub struct PatchResult {
    #[pyo3(get)]
    patched: bool,
    #[pyo3(get)]
    reason: String,
    #[pyo3(get)]
    message: Option<String>,
}

#[pymethods]
impl PatchResult {
    fn __repr__(&self) -> String {
        format!("PatchResult(patched={}, reason={})", self.patched, self.reason)
    }
}

/// Inspect a WAV file's header
#[pyfunction]
fn inspect(path: std::path::PathBuf) -> PyResult<FormatInfo> {
    let info = wav::inspect(&path)?;
    Ok(FormatInfo {
        valid: info.valid,
        format_tag: info.format_tag,
        tag_offset: info.tag_offset,
        reason: info.reason.code(),
    })
}

/// Rewrite an extensible format tag to PCM
#[pyfunction]
fn patch(path: std::path::PathBuf, tag_offset: u64) -> PatchResult {
    let result = wav::patch(&path, tag_offset);
    PatchResult {
        patched: result.patched,
        reason: result.reason.code(),
        message: result.message,
    }
}
