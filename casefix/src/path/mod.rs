//! Path handling: case-insensitive resolution and root normalization.
//!
//! # Resolution
//!
//! A reference such as `images/test_image.jpg` authored against a
//! case-insensitive filesystem may really live at `Images/Test_Image.jpg`.
//! [`CaseResolver`] recovers the real spelling by listing each directory
//! along the way and matching names case-insensitively.
//!
//! The resolver reads the filesystem only through [`DirectoryListing`], so
//! tests can run it against a [`MemoryListing`] instead of real fixtures.
//!
//! # Normalization
//!
//! [`normalize::normalize`] turns a user-supplied root into an absolute path
//! without `.`/`..` components before a run starts.
//!
//! # Examples
//!
//! ```
//! use casefix::path::{CaseResolver, MemoryListing};
//! use std::path::{Path, PathBuf};
//!
//! let fs = MemoryListing::new().with_file("/www/SubDir/Page2.html");
//! let resolver = CaseResolver::new(fs);
//!
//! let real = resolver.resolve(Path::new("/www/subdir/page2.HTML"));
//! assert_eq!(real, Some(PathBuf::from("/www/SubDir/Page2.html")));
//! ```

pub mod listing;
pub mod normalize;
pub mod resolver;

pub use listing::{DirectoryListing, MemoryListing, OsListing};
pub use resolver::{names_match, CaseResolver};
