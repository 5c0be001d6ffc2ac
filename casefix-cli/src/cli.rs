//! CLI structure and argument definitions.
//!
//! casefix has a single command, so its arguments are flattened into the
//! top-level parser alongside the global verbosity flags.

use crate::commands::FixCommand;
use clap::Parser;

/// Correct the letter case of src/href references in HTML files.
#[derive(Parser)]
#[command(name = "casefix")]
#[command(
    version,
    about = "Correct the letter case of src/href references in HTML files",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    #[command(flatten)]
    pub command: FixCommand,
}
