//! The casefix command: correct references under a directory.

use std::path::PathBuf;

use crate::error::CliError;
use crate::utils::{format_summary, load_configuration, resolve_root, GlobalOptions};
use casefix::operations::{process_directory_with, DiagnosticStream};
use casefix::{CaseResolver, Config};
use clap::{Args, ValueEnum};

/// Correct the references of every HTML document under a directory.
#[derive(Args)]
pub struct FixCommand {
    /// Directory to process
    #[arg(value_name = "DIRECTORY", default_value = ".", env = "CASEFIX_ROOT")]
    pub directory: PathBuf,

    /// Report changes without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Extension to treat as HTML (repeatable; replaces the defaults)
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Summary output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: SummaryFormat,
}

/// How the run summary is printed.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SummaryFormat {
    /// One line per changed document plus a totals line.
    Text,
    /// The full summary as JSON.
    Json,
}

impl FixCommand {
    /// Command-line settings as a configuration layer.
    ///
    /// Only settings given explicitly are set, so configuration files and
    /// environment variables still apply to everything else.
    fn overrides(&self) -> Config {
        Config {
            extensions: (!self.extensions.is_empty()).then(|| self.extensions.clone()),
            dry_run: self.dry_run.then_some(true),
            follow_symlinks: None,
        }
    }

    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Resolve the root and load configuration
        let root = resolve_root(&self.directory)?;
        let config = load_configuration(&root, self.overrides())?;
        log::debug!("processing {} with {config:?}", root.display());

        // 2. Process the tree; keep stdout pure JSON when asked for it
        let diagnostics = match self.format {
            SummaryFormat::Json => DiagnosticStream::Stderr,
            SummaryFormat::Text => DiagnosticStream::Stdout,
        };
        let summary = process_directory_with(&root, &config, &CaseResolver::os(), diagnostics)?;

        // 3. Report
        match self.format {
            SummaryFormat::Json => {
                let json = serde_json::to_string_pretty(&summary)
                    .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
                println!("{json}");
            }
            SummaryFormat::Text => {
                if !global.quiet {
                    print!("{}", format_summary(&summary));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(extensions: &[&str], dry_run: bool) -> FixCommand {
        FixCommand {
            directory: PathBuf::from("."),
            dry_run,
            extensions: extensions.iter().map(ToString::to_string).collect(),
            format: SummaryFormat::Text,
        }
    }

    #[test]
    fn test_overrides_only_set_explicit_values() {
        assert_eq!(command(&[], false).overrides(), Config::default());

        let config = command(&["xhtml"], true).overrides();
        assert_eq!(config.extensions, Some(vec!["xhtml".to_string()]));
        assert_eq!(config.dry_run, Some(true));
        assert_eq!(config.follow_symlinks, None);
    }
}
