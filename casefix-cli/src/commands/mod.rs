//! CLI command implementations.
//!
//! - `fix`: correct the `src`/`href` references under a directory

pub mod fix;

pub use fix::FixCommand;
