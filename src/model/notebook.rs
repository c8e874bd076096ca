//! Notebook-level types.

use super::Cell;
use serde::{Deserialize, Serialize};

/// A parsed Jupyter notebook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    /// Notebook metadata (kernel, language, etc.)
    #[serde(default)]
    pub metadata: NotebookMetadata,

    /// Major nbformat version
    pub nbformat: u64,

    /// Minor nbformat version
    #[serde(default)]
    pub nbformat_minor: u64,

    /// Ordered cells of the notebook
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Notebook {
    /// Create a new empty v4 notebook.
    pub fn new() -> Self {
        Self {
            metadata: NotebookMetadata::default(),
            nbformat: 4,
            nbformat_minor: 5,
            cells: Vec::new(),
        }
    }

    /// Get the number of cells in the notebook.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the notebook has any cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Add a cell to the notebook.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// The notebook's programming language, if declared.
    ///
    /// `language_info.name` takes precedence over `kernelspec.language`.
    pub fn language(&self) -> Option<&str> {
        self.metadata
            .language_info
            .as_ref()
            .map(|info| info.name.as_str())
            .or_else(|| {
                self.metadata
                    .kernelspec
                    .as_ref()
                    .and_then(|spec| spec.language.as_deref())
            })
    }

    /// Concatenated source of all cells, without any rendering.
    pub fn plain_source(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.source())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Convert notebook metadata to YAML frontmatter format.
    pub fn yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref spec) = self.metadata.kernelspec {
            lines.push(format!("kernel: \"{}\"", escape_yaml(&spec.display_name)));
        }
        if let Some(language) = self.language() {
            lines.push(format!("language: \"{}\"", escape_yaml(language)));
        }

        lines.push(format!(
            "nbformat: \"{}.{}\"",
            self.nbformat, self.nbformat_minor
        ));
        lines.push(format!("cells: {}", self.cell_count()));

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

/// Notebook metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotebookMetadata {
    /// Kernel the notebook was authored against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernelspec: Option<KernelSpec>,

    /// Language of the notebook's code cells
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_info: Option<LanguageInfo>,
}

/// Kernel specification from notebook metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KernelSpec {
    /// Kernel name (e.g., "python3")
    #[serde(default)]
    pub name: String,

    /// Human-readable kernel name (e.g., "Python 3")
    #[serde(default)]
    pub display_name: String,

    /// Kernel language (e.g., "python")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Language information from notebook metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Language name (e.g., "python")
    #[serde(default)]
    pub name: String,

    /// Language version (e.g., "3.11.4")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// File extension including the dot (e.g., ".py")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
