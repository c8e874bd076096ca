//! Notebook model types.
//!
//! This module defines the in-memory representation that bridges notebook
//! parsing and Markdown rendering. It mirrors the nbformat v4 structure:
//! a notebook holds metadata and an ordered list of cells, and code cells
//! carry execution outputs.

mod cell;
mod notebook;

pub use cell::{Cell, CellMetadata, MimeBundle, Output};
pub use notebook::{KernelSpec, LanguageInfo, Notebook, NotebookMetadata};
