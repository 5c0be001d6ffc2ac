//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Longest extension accepted.
const MAX_EXTENSION_LEN: usize = 32;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use casefix::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { extensions: Some(vec![]), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty extension list or for an
    /// extension that is empty, too long, or contains a path separator,
    /// whitespace or a null byte.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref extensions) = config.extensions {
            if extensions.is_empty() {
                return Err(Error::Validation {
                    field: "extensions".into(),
                    message: "At least one extension is required".into(),
                });
            }
            for ext in extensions {
                Self::validate_extension(ext)?;
            }
        }
        Ok(())
    }

    fn validate_extension(ext: &str) -> Result<()> {
        let bare = ext.strip_prefix('.').unwrap_or(ext);

        let problem = if bare.is_empty() {
            Some("Cannot be empty".to_string())
        } else if bare.len() > MAX_EXTENSION_LEN {
            Some(format!("Cannot exceed {MAX_EXTENSION_LEN} characters"))
        } else if bare.contains(['/', '\\']) {
            Some(format!("'{ext}' contains a path separator"))
        } else if bare.contains('.') {
            Some(format!("'{ext}' must be a single extension"))
        } else if bare.contains('\0') || bare.chars().any(char::is_whitespace) {
            Some(format!("'{ext}' contains whitespace or a null byte"))
        } else {
            None
        };

        match problem {
            Some(message) => Err(Error::Validation {
                field: "extensions".into(),
                message,
            }),
            None => Ok(()),
        }
    }
}
