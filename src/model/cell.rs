//! Cell and output types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single notebook cell, tagged by `cell_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    /// Prose cell containing Markdown source.
    Markdown {
        #[serde(default, deserialize_with = "multiline")]
        source: String,

        #[serde(default)]
        metadata: CellMetadata,
    },

    /// Executable cell with its recorded outputs.
    Code {
        #[serde(default, deserialize_with = "multiline")]
        source: String,

        #[serde(default)]
        execution_count: Option<u64>,

        #[serde(default)]
        outputs: Vec<Output>,

        #[serde(default)]
        metadata: CellMetadata,
    },

    /// Raw cell passed through to specific output formats.
    Raw {
        #[serde(default, deserialize_with = "multiline")]
        source: String,

        #[serde(default)]
        metadata: CellMetadata,
    },
}

impl Cell {
    /// Create a markdown cell.
    pub fn markdown(source: impl Into<String>) -> Self {
        Cell::Markdown {
            source: source.into(),
            metadata: CellMetadata::default(),
        }
    }

    /// Create a code cell with no outputs.
    pub fn code(source: impl Into<String>) -> Self {
        Cell::Code {
            source: source.into(),
            execution_count: None,
            outputs: Vec::new(),
            metadata: CellMetadata::default(),
        }
    }

    /// Create a raw cell.
    pub fn raw(source: impl Into<String>) -> Self {
        Cell::Raw {
            source: source.into(),
            metadata: CellMetadata::default(),
        }
    }

    /// The cell's source text.
    pub fn source(&self) -> &str {
        match self {
            Cell::Markdown { source, .. }
            | Cell::Code { source, .. }
            | Cell::Raw { source, .. } => source,
        }
    }

    /// The nbformat cell type name.
    pub fn cell_type(&self) -> &'static str {
        match self {
            Cell::Markdown { .. } => "markdown",
            Cell::Code { .. } => "code",
            Cell::Raw { .. } => "raw",
        }
    }
}

/// Cell metadata fields the converter cares about.
///
/// Unknown metadata keys are ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CellMetadata {
    /// Target mimetype of a raw cell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_mimetype: Option<String>,

    /// Cell name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Cell tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A single execution output, tagged by `output_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "output_type", rename_all = "snake_case")]
pub enum Output {
    /// Text written to stdout or stderr.
    Stream {
        /// Stream name ("stdout" or "stderr")
        name: String,

        #[serde(default, deserialize_with = "multiline")]
        text: String,
    },

    /// Rich display output.
    DisplayData {
        #[serde(default)]
        data: MimeBundle,
    },

    /// Result of the cell's last expression.
    ExecuteResult {
        #[serde(default)]
        execution_count: Option<u64>,

        #[serde(default)]
        data: MimeBundle,
    },

    /// Exception raised during execution.
    Error {
        ename: String,
        evalue: String,
        #[serde(default)]
        traceback: Vec<String>,
    },
}

/// A MIME bundle: map from MIME type to payload.
///
/// Backed by a `BTreeMap` so iteration order, and therefore rendered
/// output, is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MimeBundle(pub BTreeMap<String, Value>);

impl MimeBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a plain-text payload for a MIME type.
    pub fn insert_text(&mut self, mime: impl Into<String>, text: impl Into<String>) {
        self.0.insert(mime.into(), Value::String(text.into()));
    }

    /// Check whether the bundle carries a MIME type.
    pub fn contains(&self, mime: &str) -> bool {
        self.0.contains_key(mime)
    }

    /// The payload for a MIME type, flattened to text.
    ///
    /// nbformat encodes textual payloads as multiline strings; JSON
    /// payloads (e.g. `application/json`) are re-serialized.
    pub fn text(&self, mime: &str) -> Option<String> {
        self.0.get(mime).map(value_text)
    }

    /// Check if the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Flatten a JSON payload to text, concatenating multiline arrays.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .collect::<String>(),
        other => other.to_string(),
    }
}

/// Deserialize an nbformat multiline string: either one JSON string or an
/// array of line strings that concatenate to one.
fn multiline<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lines {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Lines::deserialize(deserializer)? {
        Lines::One(text) => text,
        Lines::Many(lines) => lines.concat(),
    })
}
