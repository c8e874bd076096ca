//! Notebook document parser.
//!
//! The actual JSON parsing is delegated to serde_json; this module wraps
//! it with input acquisition and the version gate from [`crate::detect`].

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};
use crate::model::Notebook;

/// Notebook document parser.
pub struct NotebookParser {
    data: Vec<u8>,
}

impl NotebookParser {
    /// Open a notebook file.
    ///
    /// A missing file maps to [`Error::NotFound`]; other I/O failures map
    /// to [`Error::Io`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        Ok(Self { data })
    }

    /// Parse a notebook from bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Parse a notebook from a string.
    pub fn from_str(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    /// Parse a notebook from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self { data })
    }

    /// Parse the input and return a structured [`Notebook`].
    pub fn parse(&self) -> Result<Notebook> {
        // Version gate: reject non-notebook and non-v4 input with format
        // errors before deserializing the full model.
        let format = detect_format_from_bytes(&self.data)?;

        let notebook: Notebook = serde_json::from_slice(&self.data)?;
        log::debug!(
            "parsed {} notebook with {} cells",
            format,
            notebook.cell_count()
        );

        Ok(notebook)
    }
}
