//! File-to-file notebook conversion.
//!
//! This is the crate's one operation: load a notebook from a path, render
//! it to Markdown, write the result to a path. The write goes through a
//! temporary file in the destination directory that is persisted into
//! place, so a failed conversion never leaves a truncated output file.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::parser::NotebookParser;
use crate::render::{self, RenderOptions};

/// Convert a notebook file to a Markdown file.
///
/// # Arguments
///
/// * `input` - Path to the notebook file
/// * `output` - Path of the Markdown file to create or overwrite
///
/// # Errors
///
/// * [`Error::NotFound`] if `input` does not exist
/// * [`Error::UnknownFormat`] / [`Error::UnsupportedVersion`] /
///   [`Error::NotebookParse`] if `input` is not a valid v4 notebook
/// * [`Error::Write`] if `output` cannot be written
///
/// # Example
///
/// ```no_run
/// use unnb::convert_file;
///
/// unnb::convert_file("analysis.ipynb", "analysis.md").unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    convert_file_with_options(input, output, &RenderOptions::default())
}

/// Convert a notebook file to a Markdown file with custom render options.
pub fn convert_file_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &RenderOptions,
) -> Result<()> {
    let notebook = NotebookParser::open(input.as_ref())?.parse()?;
    let markdown = render::to_markdown(&notebook, options)?;
    write_output(output.as_ref(), &markdown)?;

    log::debug!(
        "converted {} ({} cells) to {}",
        input.as_ref().display(),
        notebook.cell_count(),
        output.as_ref().display()
    );

    Ok(())
}

/// Write rendered text to `path`, ending with a single trailing newline.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_err(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| write_err(path, e))?;
    file.write_all(b"\n").map_err(|e| write_err(path, e))?;
    file.persist(path).map_err(|e| write_err(path, e.error))?;

    Ok(())
}

fn write_err(path: &Path, source: std::io::Error) -> Error {
    Error::Write {
        path: path.to_path_buf(),
        source,
    }
}
