//! Builder that assembles the effective configuration.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Layers configuration sources and validates the result.
///
/// # Examples
///
/// ```
/// use casefix::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { dry_run: Some(true), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert!(config.dry_run());
/// assert_eq!(config.extensions(), vec!["html", "htm"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    root: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files from the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration files from `root` instead of the current directory.
    #[must_use]
    pub fn with_root(mut self, root: &Path) -> Self {
        self.root = Some(root.to_path_buf());
        self
    }

    /// Do not read `casefix.yaml` / `casefix.local.yaml`.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply `CASEFIX_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source. Later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Build the effective configuration.
    ///
    /// Precedence, lowest to highest: defaults, `casefix.yaml`,
    /// `casefix.local.yaml`, environment, programmatic overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, if
    /// an environment variable is malformed, or if the result is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let root = self.root.unwrap_or_else(|| PathBuf::from("."));
            ConfigMerger::merge(ConfigLoader::load_all(&root)?)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::DRY_RUN_ENV;
    use crate::config::loader::{CONFIG_FILE, LOCAL_CONFIG_FILE};
    use serial_test::serial;
    use std::{env, fs};
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_files_then_env_then_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "extensions: [html]\nfollow_symlinks: false\n",
        )
        .unwrap();
        fs::write(dir.path().join(LOCAL_CONFIG_FILE), "dry_run: false\n").unwrap();

        env::set_var(DRY_RUN_ENV, "true");
        let result = ConfigBuilder::new()
            .with_root(dir.path())
            .with_config(Config {
                extensions: Some(vec!["xhtml".into()]),
                ..Default::default()
            })
            .build();
        env::remove_var(DRY_RUN_ENV);

        let config = result.unwrap();
        assert_eq!(config.extensions, Some(vec!["xhtml".to_string()]));
        assert_eq!(config.dry_run, Some(true));
        assert_eq!(config.follow_symlinks, Some(false));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "unknown_key: 1\n").unwrap();

        let result = ConfigBuilder::new().with_root(dir.path()).skip_env().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_result_is_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                extensions: Some(vec!["a/b".into()]),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }
}
