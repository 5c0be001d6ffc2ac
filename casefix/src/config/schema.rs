//! Configuration schema definitions.
//!
//! Every field is optional so that partial configurations from different
//! sources can be layered on top of each other. The accessor methods fill in
//! defaults for anything left unset.

use serde::{Deserialize, Serialize};

use crate::discovery::{DocumentFinder, DEFAULT_EXTENSIONS};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use casefix::config::Config;
///
/// let config: Config = serde_yaml::from_str("extensions: [html, xhtml]\ndry_run: true\n").unwrap();
/// assert_eq!(config.extensions(), vec!["html".to_string(), "xhtml".to_string()]);
/// assert!(config.dry_run());
/// assert!(config.follow_symlinks());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File extensions treated as HTML documents, without the leading dot.
    pub extensions: Option<Vec<String>>,

    /// Report changes without writing any file.
    pub dry_run: Option<bool>,

    /// Descend into symlinked directories while scanning.
    pub follow_symlinks: Option<bool>,
}

impl Config {
    /// Configured extensions, or `html` and `htm`.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        self.extensions.clone().unwrap_or_else(|| {
            DEFAULT_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect()
        })
    }

    /// Whether this is a dry run (default `false`).
    #[must_use]
    pub fn dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }

    /// Whether symlinked directories are followed (default `true`).
    #[must_use]
    pub fn follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(true)
    }

    /// A document finder configured from this configuration.
    #[must_use]
    pub fn document_finder(&self) -> DocumentFinder {
        DocumentFinder::new(self.extensions()).follow_symlinks(self.follow_symlinks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.extensions(), vec!["html", "htm"]);
        assert!(!config.dry_run());
        assert!(config.follow_symlinks());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_yaml::from_str("follow_symlinks: false\n").unwrap();
        assert_eq!(config.follow_symlinks, Some(false));
        assert_eq!(config.extensions, None);
        assert!(!config.document_finder().matches(std::path::Path::new("a.txt")));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("extensions: [html]\nports: 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_yaml() {
        let config = Config {
            extensions: Some(vec!["xhtml".to_string()]),
            dry_run: Some(true),
            follow_symlinks: None,
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
