//! Markdown rendering for notebooks.
//!
//! Follows the Markdown exporter conventions: markdown cells pass through
//! verbatim, code cells become fenced blocks tagged with the notebook
//! language, and each rich output is reduced to one representation chosen
//! by MIME priority.

use regex::Regex;

use crate::error::Result;
use crate::model::{Cell, CellMetadata, MimeBundle, Notebook, Output};

use super::RenderOptions;

/// Convert a notebook to Markdown.
pub fn to_markdown(notebook: &Notebook, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(notebook)
}

/// MIME types in display priority order; the first match wins.
const DISPLAY_PRIORITY: &[&str] = &[
    "text/html",
    "text/latex",
    "image/svg+xml",
    "image/png",
    "image/jpeg",
    "text/markdown",
    "text/plain",
];

/// Raw cells are passed through only for these target mimetypes.
const RAW_PASSTHROUGH: &[&str] = &["", "text/markdown", "text/html"];

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    ansi_escape: Regex,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ansi_escape: Regex::new(r"\x1b\[.*?[@-~]").unwrap(),
        }
    }

    /// Render a notebook to Markdown.
    pub fn render(&self, notebook: &Notebook) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&notebook.yaml_frontmatter());
            output.push('\n');
        }

        let language = self
            .options
            .language
            .as_deref()
            .or_else(|| notebook.language())
            .unwrap_or("")
            .to_string();

        for (cell_index, cell) in notebook.cells.iter().enumerate() {
            self.render_cell(&mut output, cell, cell_index, &language);
        }

        // Trailing separator and leading blank lines go; leading indentation
        // on the first block is significant and must survive.
        Ok(output.trim_end().trim_start_matches('\n').to_string())
    }

    fn render_cell(&self, output: &mut String, cell: &Cell, cell_index: usize, language: &str) {
        match cell {
            Cell::Markdown { source, .. } => {
                if !source.trim().is_empty() {
                    push_block(output, source);
                }
            }
            Cell::Code {
                source, outputs, ..
            } => {
                if !source.trim().is_empty() {
                    self.render_code_fence(output, source, language);
                }
                for (output_index, out) in outputs.iter().enumerate() {
                    self.render_output(output, out, cell_index, output_index);
                }
            }
            Cell::Raw { source, metadata } => {
                if raw_passthrough(metadata) && !source.trim().is_empty() {
                    push_block(output, source);
                }
            }
        }
    }

    fn render_code_fence(&self, output: &mut String, source: &str, language: &str) {
        output.push_str("```");
        output.push_str(language);
        output.push('\n');
        output.push_str(source);
        if !source.ends_with('\n') {
            output.push('\n');
        }
        output.push_str("```\n\n");
    }

    fn render_output(
        &self,
        output: &mut String,
        out: &Output,
        cell_index: usize,
        output_index: usize,
    ) {
        match out {
            Output::Stream { text, .. } => {
                let text = self.strip_ansi(text);
                if !text.trim().is_empty() {
                    push_block(output, &text);
                }
            }
            Output::Error { traceback, .. } => {
                let lines: Vec<String> = traceback
                    .iter()
                    .map(|line| self.strip_ansi(line))
                    .collect();
                let text = lines.join("\n");
                if !text.trim().is_empty() {
                    push_block(output, &text);
                }
            }
            Output::DisplayData { data } | Output::ExecuteResult { data, .. } => {
                self.render_data(output, data, cell_index, output_index);
            }
        }
    }

    fn render_data(
        &self,
        output: &mut String,
        data: &MimeBundle,
        cell_index: usize,
        output_index: usize,
    ) {
        for &mime in DISPLAY_PRIORITY {
            if !data.contains(mime) {
                continue;
            }
            match mime {
                "image/svg+xml" | "image/png" | "image/jpeg" => {
                    self.render_image(output, mime, cell_index, output_index);
                }
                "text/plain" => {
                    if let Some(text) = data.text(mime) {
                        push_block(output, &indent(&text));
                    }
                }
                _ => {
                    if let Some(text) = data.text(mime) {
                        push_block(output, &text);
                    }
                }
            }
            return;
        }
    }

    fn render_image(
        &self,
        output: &mut String,
        mime: &str,
        cell_index: usize,
        output_index: usize,
    ) {
        let (label, ext) = match mime {
            "image/svg+xml" => ("svg", "svg"),
            "image/jpeg" => ("jpeg", "jpeg"),
            _ => ("png", "png"),
        };
        // Filename scheme of the exporter's output extraction step, so the
        // references match what a sibling extraction pass would produce.
        push_block(
            output,
            &format!(
                "![{}]({}output_{}_{}.{})",
                label, self.options.image_path_prefix, cell_index, output_index, ext
            ),
        );
    }

    fn strip_ansi(&self, text: &str) -> String {
        if self.options.strip_ansi {
            self.ansi_escape.replace_all(text, "").into_owned()
        } else {
            text.to_string()
        }
    }
}

/// Include a raw cell only when its target mimetype is Markdown-compatible.
fn raw_passthrough(metadata: &CellMetadata) -> bool {
    match metadata.raw_mimetype.as_deref() {
        Some(mimetype) => RAW_PASSTHROUGH.contains(&mimetype),
        None => true,
    }
}

/// Append a block followed by a blank-line separator.
fn push_block(output: &mut String, block: &str) {
    output.push_str(block.trim_end());
    output.push_str("\n\n");
}

/// Indent every non-empty line by four spaces.
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("    {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
