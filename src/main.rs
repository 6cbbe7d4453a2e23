//! lfnorm - Rewrite source files under a directory tree to use LF line endings
//!
//! lfnorm provides:
//! - Recursive discovery of files with a target extension (default: `cs`)
//! - Exclusion of anything under a dot-prefixed path segment
//! - In-place CRLF/CR to LF normalization
//! - An optional report of what was touched (jsonl/json/md)

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
