#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # casefix
//!
//! A library for correcting the letter case of file references in HTML.
//!
//! Sites authored on a case-insensitive filesystem often reference
//! `images/logo.png` when the file is really `Images/Logo.PNG`. Served from a
//! case-sensitive filesystem those references break. This library walks a
//! directory tree, resolves every `src` and `href` value case-insensitively
//! against the files actually on disk, and rewrites the values to the real
//! spelling.
//!
//! ## Core Types
//!
//! - [`DocumentFinder`]: enumerates the HTML documents under a root
//! - [`CaseResolver`]: finds the real, case-exact form of a path
//! - [`ReferenceRewriter`]: corrects references inside one document
//! - [`process_directory`] and [`RunSummary`]: run over a whole tree
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use casefix::path::{CaseResolver, MemoryListing};
//! use casefix::ReferenceRewriter;
//! use std::path::Path;
//!
//! let resolver = CaseResolver::new(
//!     MemoryListing::new().with_file("/site/Images/Test_Image.jpg"),
//! );
//! let html = r#"<IMG SRC="images/test_image.jpg"/>"#;
//! let fixed = ReferenceRewriter::new(&resolver).rewrite(html, Path::new("/site"));
//! assert_eq!(fixed, r#"<IMG SRC="Images/Test_Image.jpg">"#);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod html;
pub mod logging;
pub mod operations;
pub mod path;
pub mod rewrite;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use discovery::{find_html_files, DocumentFinder, HtmlFiles};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    process_directory, DocumentPlan, PlanExecutor, RewritePlan, RewritePlanner, RunSummary,
};
pub use path::{CaseResolver, DirectoryListing};
pub use rewrite::{ReferenceChange, ReferenceRewriter};
