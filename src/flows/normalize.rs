//! Normalize flow - enumerate, filter, rewrite
//!
//! The first error aborts the whole run. Files already rewritten stay
//! rewritten and files not yet reached stay untouched.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::backends::rewrite::{rewrite_file, RewriteStats};
use crate::backends::scan::collect_candidates;
use crate::core::error::Result;
use crate::core::model::{FileOutcome, Report, Status};
use crate::core::paths::{
    clean_extension, is_excluded, make_relative, normalize_path, relative_segments,
    DEFAULT_EXTENSION,
};

/// Options for a normalization run
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Target extension without the leading '.'
    pub extension: String,
    /// Print one line per candidate to stderr
    pub verbose: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            verbose: false,
        }
    }
}

impl NormalizeOptions {
    pub fn new(extension: &str, verbose: bool) -> Self {
        Self {
            extension: clean_extension(extension).to_string(),
            verbose,
        }
    }
}

/// Normalize every eligible file under `root` in place
pub fn run(root: &Path, options: &NormalizeOptions) -> Result<Report> {
    let candidates = collect_candidates(root, &options.extension)?;
    let report = rewrite_candidates(root, candidates, options)?;

    if options.verbose {
        let summary = report.summary();
        eprintln!(
            "{} {} rewritten, {} unchanged, {} skipped ({} line endings replaced)",
            "done:".bold(),
            summary.rewritten,
            summary.unchanged,
            summary.skipped,
            summary.replaced
        );
    }

    Ok(report)
}

fn display_path(path: &Path, root: &Path) -> String {
    make_relative(path, root).unwrap_or_else(|| normalize_path(path))
}

fn outcome_for(path: &Path, root: &Path, stats: RewriteStats) -> FileOutcome {
    FileOutcome::written(display_path(path, root), stats.replaced, stats.size)
}

fn log_outcome(outcome: &FileOutcome) {
    let label = match outcome.status {
        Status::Rewritten => outcome.status.as_str().green(),
        Status::Unchanged => outcome.status.as_str().normal(),
        Status::Skipped => outcome.status.as_str().yellow(),
    };
    if outcome.replaced > 0 {
        eprintln!("{} {} ({} line endings)", label, outcome.path, outcome.replaced);
    } else {
        eprintln!("{} {}", label, outcome.path);
    }
}

#[cfg(not(feature = "parallel"))]
fn rewrite_candidates(
    root: &Path,
    candidates: Vec<PathBuf>,
    options: &NormalizeOptions,
) -> Result<Report> {
    let mut report = Report::new();

    for path in candidates {
        let outcome = if is_excluded(&relative_segments(&path, root)) {
            FileOutcome::skipped(display_path(&path, root))
        } else {
            outcome_for(&path, root, rewrite_file(&path)?)
        };

        if options.verbose {
            log_outcome(&outcome);
        }
        report.push(outcome);
    }

    Ok(report)
}

#[cfg(feature = "parallel")]
fn rewrite_candidates(
    root: &Path,
    candidates: Vec<PathBuf>,
    options: &NormalizeOptions,
) -> Result<Report> {
    use rayon::prelude::*;

    let (skipped, eligible): (Vec<PathBuf>, Vec<PathBuf>) = candidates
        .into_iter()
        .partition(|path| is_excluded(&relative_segments(path, root)));

    let mut report: Report = skipped
        .iter()
        .map(|path| FileOutcome::skipped(display_path(path, root)))
        .collect();

    let written = eligible
        .par_iter()
        .map(|path| rewrite_file(path).map(|stats| outcome_for(path, root, stats)))
        .collect::<Result<Vec<_>>>()?;
    report.extend(written);

    if options.verbose {
        report.items.iter().for_each(log_outcome);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_default_options() {
        let options = NormalizeOptions::default();
        assert_eq!(options.extension, "cs");
        assert!(!options.verbose);
    }

    #[test]
    fn test_options_strip_leading_dot() {
        assert_eq!(NormalizeOptions::new(".txt", false).extension, "txt");
    }

    #[test]
    fn test_run_example_scenarios() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("src/A.cs"), b"line1\r\nline2\r\n");
        write_file(&root.join(".git/hooks/pre-commit.cs"), b"x\r\n");
        write_file(&root.join("src/B.txt"), b"a\r\nb\r\n");
        write_file(&root.join("src/C.cs"), b"only\nlf\n");
        write_file(&root.join("src/D.cs"), b"");

        let mut report = run(root, &NormalizeOptions::default()).unwrap();

        assert_eq!(fs::read(root.join("src/A.cs")).unwrap(), b"line1\nline2\n");
        assert_eq!(fs::read(root.join(".git/hooks/pre-commit.cs")).unwrap(), b"x\r\n");
        assert_eq!(fs::read(root.join("src/B.txt")).unwrap(), b"a\r\nb\r\n");
        assert_eq!(fs::read(root.join("src/C.cs")).unwrap(), b"only\nlf\n");
        assert!(fs::read(root.join("src/D.cs")).unwrap().is_empty());

        report.sort();
        let statuses: Vec<_> = report
            .items
            .iter()
            .map(|i| (i.path.as_str(), i.status))
            .collect();
        assert_eq!(
            statuses,
            vec![
                (".git/hooks/pre-commit.cs", Status::Skipped),
                ("src/A.cs", Status::Rewritten),
                ("src/C.cs", Status::Unchanged),
                ("src/D.cs", Status::Unchanged),
            ]
        );
    }

    #[test]
    fn test_run_skips_hidden_file_name() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("src/.hidden.cs"), b"x\r\n");

        run(temp.path(), &NormalizeOptions::default()).unwrap();
        assert_eq!(fs::read(temp.path().join("src/.hidden.cs")).unwrap(), b"x\r\n");
    }

    #[test]
    fn test_run_is_idempotent() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a/b/E.cs");
        write_file(&file, b"one\r\ntwo\rthree\n");

        run(temp.path(), &NormalizeOptions::default()).unwrap();
        let first = fs::read(&file).unwrap();
        let report = run(temp.path(), &NormalizeOptions::default()).unwrap();
        let second = fs::read(&file).unwrap();

        assert_eq!(first, b"one\ntwo\nthree\n");
        assert_eq!(first, second);
        assert_eq!(report.summary().replaced, 0);
    }

    #[test]
    fn test_run_custom_extension() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("notes.txt"), b"a\r\n");
        write_file(&temp.path().join("Main.cs"), b"b\r\n");

        run(temp.path(), &NormalizeOptions::new("txt", false)).unwrap();
        assert_eq!(fs::read(temp.path().join("notes.txt")).unwrap(), b"a\n");
        assert_eq!(fs::read(temp.path().join("Main.cs")).unwrap(), b"b\r\n");
    }

    #[test]
    fn test_run_aborts_on_decode_error() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("bad.cs"), &[0xFF, b'\r', b'\n']);

        let err = run(temp.path(), &NormalizeOptions::default()).unwrap_err();
        assert_eq!(err.code(), "DECODE_FAILED");
    }

    #[test]
    fn test_run_abort_leaves_unreached_files_whole() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        let good: Vec<_> = (0..8).map(|i| root.join(format!("F{}.cs", i))).collect();
        for path in &good {
            write_file(path, b"a\r\nb\r\n");
        }
        write_file(&root.join("Bad.cs"), &[0xFF, b'\r', b'\n']);

        let err = run(root, &NormalizeOptions::default()).unwrap_err();
        assert_eq!(err.code(), "DECODE_FAILED");

        // Each file is either fully normalized or not touched at all
        assert_eq!(fs::read(root.join("Bad.cs")).unwrap(), [0xFF, b'\r', b'\n']);
        for path in &good {
            let content = fs::read(path).unwrap();
            assert!(
                content == b"a\nb\n" || content == b"a\r\nb\r\n",
                "unexpected content in {}: {:?}",
                path.display(),
                content
            );
        }
    }

    #[test]
    fn test_run_file_root_is_left_alone() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("A.cs");
        write_file(&file, b"x\r\n");

        let report = run(&file, &NormalizeOptions::default()).unwrap();
        assert!(report.is_empty());
        assert_eq!(fs::read(&file).unwrap(), b"x\r\n");
    }

    #[test]
    fn test_run_missing_root() {
        let temp = tempdir().unwrap();
        let err = run(&temp.path().join("missing"), &NormalizeOptions::default()).unwrap_err();
        assert_eq!(err.code(), "TRAVERSE_FAILED");
    }
}
