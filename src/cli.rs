//! CLI module - Command-line interface definition and entry handler

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::paths::DEFAULT_EXTENSION;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::flows::normalize::{self, NormalizeOptions};

/// lfnorm - rewrite files under a directory tree to use LF line endings.
#[derive(Parser, Debug)]
#[command(name = "lfnorm")]
#[command(
    author,
    version,
    about,
    long_about = r#"lfnorm finds every file with the target extension under ROOT and rewrites it
in place so that all CRLF and CR line endings become LF.

Any file with a path segment starting with '.' (for example .git/ or
.hidden.cs) is left untouched. The first read, decode or write failure aborts
the run; files already rewritten stay rewritten.

With no arguments, ROOT is the parent of the directory holding the lfnorm
executable, so the tool can live in a tools/ folder of the project it cleans.

Examples:
    lfnorm
    lfnorm --root path/to/project
    lfnorm --root . --ext txt --format md
"#
)]
pub struct Cli {
    /// Root directory to normalize.
    #[arg(
        long,
        value_name = "ROOT",
        long_help = "Root directory to normalize.\n\n\
Defaults to the parent of the directory containing the lfnorm executable.\n\
Report paths are relative to this root."
    )]
    pub root: Option<PathBuf>,

    /// Target file extension.
    #[arg(
        long,
        default_value = DEFAULT_EXTENSION,
        value_name = "EXT",
        long_help = "Only files whose extension equals EXT are rewritten (case-sensitive).\n\
A leading '.' is accepted: --ext .cs and --ext cs are the same."
    )]
    pub ext: String,

    /// Print a report of touched files (jsonl/json/md).
    #[arg(
        long,
        value_parser = ["jsonl", "json", "md", "markdown"],
        value_name = "FORMAT",
        long_help = "Print a report of every candidate file to stdout after the run.\n\n\
Supported values:\n\
- jsonl: one JSON object per line\n\
- json: a single JSON array\n\
- md: human-friendly Markdown\n\n\
Without this flag lfnorm prints nothing to stdout."
    )]
    pub format: Option<String>,

    /// Pretty-print JSON/JSONL report output.
    #[arg(long)]
    pub pretty: bool,

    /// Print one diagnostic line per file to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored diagnostics.
    #[arg(long)]
    pub no_color: bool,
}

/// Resolve the default root: one level above the executable's directory
fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the lfnorm executable")?;
    exe.parent()
        .and_then(|dir| dir.parent())
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("executable {} has no parent directory", exe.display()))
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format = cli
        .format
        .as_deref()
        .map(|f| f.parse::<OutputFormat>().map_err(|e| anyhow!(e)))
        .transpose()?;

    let root = match cli.root {
        Some(root) => root,
        None => default_root()?,
    };
    let root = root.canonicalize().unwrap_or(root);

    let options = NormalizeOptions::new(&cli.ext, cli.verbose);
    let mut report = normalize::run(&root, &options).map_err(|e| {
        let code = e.code();
        anyhow::Error::new(e).context(format!("[{}] failed to normalize {}", code, root.display()))
    })?;

    if let Some(format) = format {
        report.sort();
        let renderer = Renderer::with_config(RenderConfig::with_pretty(format, cli.pretty));
        println!("{}", renderer.render(&report));
    }

    Ok(())
}
