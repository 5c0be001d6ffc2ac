//! Configuration system for casefix.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files in the root directory being processed
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CASEFIX_*`)
//! 3. Private config (`casefix.local.yaml`)
//! 4. Shared config (`casefix.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use casefix::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_root(Path::new("/var/www/site"))
//!     .build()
//!     .unwrap();
//!
//! println!("extensions: {:?}", config.extensions());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
