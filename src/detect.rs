//! Notebook format detection and version validation.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Notebook format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookFormat {
    /// Major nbformat version (e.g., 4)
    pub major: u64,
    /// Minor nbformat version (e.g., 5)
    pub minor: u64,
}

impl std::fmt::Display for NotebookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "nbformat {}.{}", self.major, self.minor)
    }
}

/// The nbformat major version this library understands.
pub const SUPPORTED_MAJOR: u64 = 4;

/// Minimal view of a notebook used to probe the format version.
#[derive(Deserialize)]
struct VersionProbe {
    nbformat: u64,
    #[serde(default)]
    nbformat_minor: u64,
}

/// Detect the notebook format from a file path.
///
/// # Arguments
/// * `path` - Path to the notebook file
///
/// # Returns
/// * `Ok(NotebookFormat)` if the file is a version-4 notebook
/// * `Err(Error::NotFound)` if the file does not exist
/// * `Err(Error::UnknownFormat)` if the file is not notebook JSON
/// * `Err(Error::UnsupportedVersion)` for non-v4 notebooks
///
/// # Example
/// ```no_run
/// use unnb::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("analysis.ipynb").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<NotebookFormat> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    detect_format_from_bytes(&data)
}

/// Detect the notebook format from bytes.
///
/// Notebooks carry no magic number; the version lives inside the JSON
/// document, so detection is a probe deserialization of the top-level
/// `nbformat` fields.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<NotebookFormat> {
    // A notebook is always a JSON object; reject anything else before
    // handing the full input to serde_json.
    let first = data.iter().find(|b| !b.is_ascii_whitespace());
    if first != Some(&b'{') {
        return Err(Error::UnknownFormat);
    }

    let probe: VersionProbe =
        serde_json::from_slice(data).map_err(|_| Error::UnknownFormat)?;

    if probe.nbformat != SUPPORTED_MAJOR {
        return Err(Error::UnsupportedVersion(probe.nbformat));
    }

    Ok(NotebookFormat {
        major: probe.nbformat,
        minor: probe.nbformat_minor,
    })
}

/// Check if a file is a supported notebook.
pub fn is_notebook<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes represent a supported notebook.
pub fn is_notebook_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
