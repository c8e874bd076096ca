//! Error types for the unnb library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unnb operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during notebook conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file content is not recognized as a Jupyter notebook.
    #[error("unknown file format: not a Jupyter notebook")]
    UnknownFormat,

    /// The notebook format version is not supported.
    #[error("unsupported nbformat version: {0}")]
    UnsupportedVersion(u64),

    /// Error parsing the notebook structure.
    #[error("notebook parsing error: {0}")]
    NotebookParse(String),

    /// Error during Markdown rendering.
    #[error("rendering error: {0}")]
    Render(String),

    /// The output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::NotebookParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "unknown file format: not a Jupyter notebook");

        let err = Error::UnsupportedVersion(3);
        assert_eq!(err.to_string(), "unsupported nbformat version: 3");

        let err = Error::NotFound(PathBuf::from("missing.ipynb"));
        assert_eq!(err.to_string(), "input file not found: missing.ipynb");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::NotebookParse(_)));
    }
}
