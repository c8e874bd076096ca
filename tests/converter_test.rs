//! Integration tests for file-to-file conversion.

use std::fs;
use std::path::Path;

use unnb::{convert_file, convert_file_with_options, Error, RenderOptions};

const HELLO_NOTEBOOK: &str = r#"{
    "cells": [
        {"cell_type": "markdown", "metadata": {}, "source": ["hello"]}
    ],
    "metadata": {
        "kernelspec": {"name": "python3", "display_name": "Python 3", "language": "python"},
        "language_info": {"name": "python", "version": "3.11.4"}
    },
    "nbformat": 4,
    "nbformat_minor": 5
}"#;

const FULL_NOTEBOOK: &str = r##"{
    "cells": [
        {"cell_type": "markdown", "metadata": {}, "source": ["# Report\n", "\n", "Summary below."]},
        {"cell_type": "code", "metadata": {}, "execution_count": 1,
         "source": ["total = 40 + 2\n", "print(total)"],
         "outputs": [
            {"output_type": "stream", "name": "stdout", "text": ["42\n"]},
            {"output_type": "execute_result", "execution_count": 1,
             "data": {"text/plain": ["42"]}, "metadata": {}}
         ]},
        {"cell_type": "raw", "metadata": {}, "source": ["<footer>end</footer>"]}
    ],
    "metadata": {"language_info": {"name": "python"}},
    "nbformat": 4,
    "nbformat_minor": 5
}"##;

fn write_notebook(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_convert_produces_nonempty_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_notebook(dir.path(), "full.ipynb", FULL_NOTEBOOK);
    let output = dir.path().join("full.md");

    convert_file(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.is_empty());
    assert!(content.contains("# Report"));
    assert!(content.contains("```python\ntotal = 40 + 2\nprint(total)\n```"));
    assert!(content.contains("    42"));
    assert!(content.contains("<footer>end</footer>"));
}

#[test]
fn test_convert_hello_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_notebook(dir.path(), "hello.ipynb", HELLO_NOTEBOOK);
    let output = dir.path().join("hello.md");

    convert_file(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("hello"));
}

#[test]
fn test_convert_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_notebook(dir.path(), "full.ipynb", FULL_NOTEBOOK);
    let first = dir.path().join("first.md");
    let second = dir.path().join("second.md");

    convert_file(&input, &first).unwrap();
    convert_file(&input, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_convert_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_notebook(dir.path(), "hello.ipynb", HELLO_NOTEBOOK);
    let output = dir.path().join("hello.md");
    fs::write(&output, "stale content").unwrap();

    convert_file(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains("stale content"));
    assert!(content.contains("hello"));
}

#[test]
fn test_missing_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.ipynb");
    let output = dir.path().join("absent.md");

    let result = convert_file(&input, &output);

    assert!(matches!(result, Err(Error::NotFound(_))));
    assert!(!output.exists());
}

#[test]
fn test_malformed_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_notebook(dir.path(), "broken.ipynb", "{\"cells\": [");
    let output = dir.path().join("broken.md");

    let result = convert_file(&input, &output);

    assert!(matches!(result, Err(Error::UnknownFormat)));
    assert!(!output.exists());
}

#[test]
fn test_non_notebook_json_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_notebook(dir.path(), "data.ipynb", r#"{"rows": [1, 2, 3]}"#);
    let output = dir.path().join("data.md");

    let result = convert_file(&input, &output);

    assert!(matches!(result, Err(Error::UnknownFormat)));
    assert!(!output.exists());
}

#[test]
fn test_old_nbformat_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_notebook(
        dir.path(),
        "old.ipynb",
        r#"{"worksheets": [], "nbformat": 3, "nbformat_minor": 0}"#,
    );
    let output = dir.path().join("old.md");

    let result = convert_file(&input, &output);

    assert!(matches!(result, Err(Error::UnsupportedVersion(3))));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_notebook(dir.path(), "hello.ipynb", HELLO_NOTEBOOK);
    let output = dir.path().join("missing-dir").join("hello.md");

    let result = convert_file(&input, &output);

    assert!(matches!(result, Err(Error::Write { .. })));
}

#[test]
fn test_convert_with_frontmatter() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_notebook(dir.path(), "hello.ipynb", HELLO_NOTEBOOK);
    let output = dir.path().join("hello.md");

    let options = RenderOptions::new().with_frontmatter(true);
    convert_file_with_options(&input, &output, &options).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("kernel: \"Python 3\""));
    assert!(content.contains("hello"));
}
