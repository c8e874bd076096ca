//! unnb CLI - notebook to Markdown conversion tool

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use unnb::RenderOptions;

#[derive(Parser)]
#[command(name = "unnb")]
#[command(version)]
#[command(about = "Convert a Jupyter notebook to Markdown", long_about = None)]
struct Cli {
    /// Input notebook file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (defaults to the input path with an .md extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Include YAML frontmatter with notebook metadata
    #[arg(short, long)]
    frontmatter: bool,

    /// Print the Markdown to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> unnb::Result<()> {
    let options = RenderOptions::new().with_frontmatter(cli.frontmatter);

    if cli.stdout {
        let markdown = unnb::to_markdown_with_options(&cli.input, &options)?;
        println!("{}", markdown);
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.input));

    unnb::convert_file_with_options(&cli.input, &output, &options)?;
    println!("{} {}", "Saved to".green(), output.display());

    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension("md")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        assert_eq!(
            default_output(Path::new("dir/report.ipynb")),
            PathBuf::from("dir/report.md")
        );
        assert_eq!(default_output(Path::new("plain")), PathBuf::from("plain.md"));
    }
}
