//! # unnb
//!
//! Jupyter notebook conversion to Markdown for Rust.
//!
//! This library reads a notebook file (`.ipynb`, nbformat v4) and renders
//! it as Markdown: markdown cells pass through verbatim, code cells become
//! fenced blocks tagged with the notebook language, and recorded outputs
//! are reduced to their best Markdown representation.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> unnb::Result<()> {
//!     // One-call file-to-file conversion
//!     unnb::convert_file("analysis.ipynb", "analysis.md")?;
//!
//!     // Or work with the parsed notebook directly
//!     let notebook = unnb::parse_file("analysis.ipynb")?;
//!     let markdown = unnb::render::to_markdown(&notebook, &unnb::RenderOptions::default())?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{convert_file, convert_file_with_options};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_notebook, NotebookFormat};
pub use error::{Error, Result};
pub use model::{Cell, CellMetadata, KernelSpec, LanguageInfo, MimeBundle, Notebook, Output};
pub use parser::NotebookParser;
pub use render::{MarkdownRenderer, RenderOptions};

use std::io::Read;
use std::path::Path;

/// Parse a notebook file and return a structured notebook.
///
/// # Arguments
///
/// * `path` - Path to the notebook file
///
/// # Example
///
/// ```no_run
/// use unnb::parse_file;
///
/// let notebook = parse_file("analysis.ipynb").unwrap();
/// println!("Cells: {}", notebook.cell_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Notebook> {
    NotebookParser::open(path)?.parse()
}

/// Parse a notebook from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Notebook> {
    NotebookParser::from_bytes(data).parse()
}

/// Parse a notebook from a string.
pub fn parse_str(content: &str) -> Result<Notebook> {
    NotebookParser::from_str(content).parse()
}

/// Parse a notebook from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Notebook> {
    NotebookParser::from_reader(reader)?.parse()
}

/// Convert a notebook file to a Markdown string.
///
/// # Example
///
/// ```no_run
/// use unnb::to_markdown;
///
/// let markdown = to_markdown("analysis.ipynb").unwrap();
/// println!("{}", markdown);
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let notebook = parse_file(path)?;
    render::to_markdown(&notebook, &RenderOptions::default())
}

/// Convert a notebook file to a Markdown string with custom options.
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let notebook = parse_file(path)?;
    render::to_markdown(&notebook, options)
}

/// Extract the concatenated cell sources from a notebook file.
pub fn extract_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let notebook = parse_file(path)?;
    Ok(notebook.plain_source())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = r#"{
        "cells": [{"cell_type": "markdown", "metadata": {}, "source": ["hello"]}],
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 5
    }"#;

    #[test]
    fn test_parse_str() {
        let notebook = parse_str(HELLO).unwrap();
        assert_eq!(notebook.cell_count(), 1);
    }

    #[test]
    fn test_parse_bytes_empty_data() {
        let data: [u8; 0] = [];
        let result = parse_bytes(&data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_reader() {
        let notebook = parse_reader(HELLO.as_bytes()).unwrap();
        assert_eq!(notebook.cells[0].source(), "hello");
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("nowhere.ipynb");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
