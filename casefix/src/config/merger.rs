//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use casefix::config::{Config, ConfigMerger};
///
/// let low = Config { dry_run: Some(false), ..Default::default() };
/// let high = Config { dry_run: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.dry_run, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced wholesale when set in `source`; extension
    /// lists are not accumulated, so a higher layer can narrow the set.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.extensions.is_some() {
            target.extensions.clone_from(&source.extensions);
        }

        if source.dry_run.is_some() {
            target.dry_run = source.dry_run;
        }

        if source.follow_symlinks.is_some() {
            target.follow_symlinks = source.follow_symlinks;
        }
    }
}
