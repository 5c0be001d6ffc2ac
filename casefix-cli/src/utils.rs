//! Utility functions for CLI operations.
//!
//! Root resolution, configuration loading and summary formatting.

use crate::error::CliError;
use casefix::path::normalize::normalize;
use casefix::{Config, ConfigBuilder, RunSummary};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    #[allow(dead_code)]
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Normalize the root directory (make absolute, expand ~, resolve `..`)
/// without following symlinks.
pub fn resolve_root(path: &Path) -> Result<PathBuf, CliError> {
    normalize(path).map_err(CliError::from)
}

/// Load hierarchical configuration for a run over `root`.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (highest priority)
/// 2. Environment variables
/// 3. `casefix.local.yaml` and `casefix.yaml` in `root`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(root: &Path, overrides: Config) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .with_root(root)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Show `path` relative to `root` when it lies beneath it.
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Render a summary as text: one block per changed document, then totals.
pub fn format_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    let verb = if summary.dry_run {
        "would rewrite"
    } else {
        "rewrote"
    };

    for document in &summary.documents {
        let _ = writeln!(
            out,
            "{verb} {} ({} reference{})",
            display_path(&summary.root, &document.path),
            document.changes.len(),
            if document.changes.len() == 1 { "" } else { "s" }
        );
        for change in &document.changes {
            let _ = writeln!(
                out,
                "  {} {}: {} -> {}",
                change.tag, change.attribute, change.original, change.corrected
            );
        }
    }

    let _ = writeln!(
        out,
        "{} of {} documents {}, {} references corrected, {} skipped",
        summary.rewritten,
        summary.scanned,
        if summary.dry_run {
            "would change"
        } else {
            "changed"
        },
        summary.references_corrected,
        summary.skipped.len()
    );
    out
}
