//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `CASEFIX_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Comma-separated list of document extensions.
pub const EXTENSIONS_ENV: &str = "CASEFIX_EXTENSIONS";

/// Boolean dry-run switch.
pub const DRY_RUN_ENV: &str = "CASEFIX_DRY_RUN";

/// Boolean switch for following symlinked directories.
pub const FOLLOW_SYMLINKS_ENV: &str = "CASEFIX_FOLLOW_SYMLINKS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use casefix::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable holds an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(list) = env::var(EXTENSIONS_ENV) {
            config.extensions = Some(Self::parse_list(&list));
        }

        if let Ok(val) = env::var(DRY_RUN_ENV) {
            config.dry_run = Some(Self::parse_bool(DRY_RUN_ENV, &val)?);
        }

        if let Ok(val) = env::var(FOLLOW_SYMLINKS_ENV) {
            config.follow_symlinks = Some(Self::parse_bool(FOLLOW_SYMLINKS_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean from an environment variable value.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Split a comma-separated list, trimming entries and dropping empty ones.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
