//! Configuration file discovery and loading.
//!
//! Configuration files live in the root directory being processed:
//! `casefix.yaml` for shared settings and `casefix.local.yaml` for
//! private overrides.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the shared configuration file.
pub const CONFIG_FILE: &str = "casefix.yaml";

/// Name of the private configuration file (higher precedence).
pub const LOCAL_CONFIG_FILE: &str = "casefix.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files from a root directory.
///
/// # Examples
///
/// ```no_run
/// use casefix::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("site")).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `casefix.yaml` (precedence 1) and `casefix.local.yaml`
    /// (precedence 2) from `root`, lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(root: &Path) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        for (name, precedence) in [(CONFIG_FILE, 1), (LOCAL_CONFIG_FILE, 2)] {
            let path = root.join(name);
            if !path.is_file() {
                continue;
            }
            log::debug!("loading configuration from {}", path.display());
            let config = Self::load_file(&path)?;
            sources.push(ConfigSource {
                path,
                precedence,
                config,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }
}
