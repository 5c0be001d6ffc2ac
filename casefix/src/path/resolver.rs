//! Case-insensitive path resolution.
//!
//! [`CaseResolver`] takes a candidate path whose segments may be spelled in
//! the wrong letter case and walks it one segment at a time, replacing each
//! segment with the name actually stored on disk. If any segment has no
//! case-insensitive match, there is nothing to resolve.
//!
//! Listing failures (permissions, races, vanished directories) are treated
//! the same as a missing entry: the reference simply stays unresolved.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use super::listing::{DirectoryListing, OsListing};

/// Compare two file names ignoring letter case.
///
/// UTF-8 names are compared with full Unicode lowercasing, so `Страница` and
/// `страница` match. Names that are not valid UTF-8 fall back to an ASCII
/// case-insensitive byte comparison.
///
/// # Examples
///
/// ```
/// use casefix::path::names_match;
/// use std::ffi::OsStr;
///
/// assert!(names_match(OsStr::new("Test_Image.JPG"), OsStr::new("test_image.jpg")));
/// assert!(names_match(OsStr::new("Подпапка"), OsStr::new("подпапка")));
/// assert!(!names_match(OsStr::new("page2.html"), OsStr::new("page.html")));
/// ```
#[must_use]
pub fn names_match(a: &OsStr, b: &OsStr) -> bool {
    match (a.to_str(), b.to_str()) {
        (Some(a), Some(b)) => a == b || a.to_lowercase() == b.to_lowercase(),
        _ => a
            .as_encoded_bytes()
            .eq_ignore_ascii_case(b.as_encoded_bytes()),
    }
}

/// Pick the directory entry that `segment` refers to.
///
/// An exact match always wins. Among entries that differ only in case, the
/// lexicographically smallest name is chosen so the result never depends on
/// directory listing order.
fn select_entry<'a>(entries: &'a [OsString], segment: &OsStr) -> Option<&'a OsString> {
    if let Some(exact) = entries.iter().find(|name| name.as_os_str() == segment) {
        return Some(exact);
    }
    entries
        .iter()
        .filter(|name| names_match(name, segment))
        .min()
}

/// Resolves candidate paths to their real, case-exact form.
///
/// # Examples
///
/// ```
/// use casefix::path::{CaseResolver, MemoryListing};
/// use std::path::{Path, PathBuf};
///
/// let fs = MemoryListing::new().with_file("/site/Images/Test_Image.jpg");
/// let resolver = CaseResolver::new(fs);
///
/// assert_eq!(
///     resolver.resolve(Path::new("/site/images/test_image.JPG")),
///     Some(PathBuf::from("/site/Images/Test_Image.jpg"))
/// );
/// assert_eq!(resolver.resolve(Path::new("/site/images/missing.png")), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaseResolver<L = OsListing> {
    listing: L,
}

impl CaseResolver<OsListing> {
    /// A resolver over the live filesystem.
    #[must_use]
    pub const fn os() -> Self {
        Self { listing: OsListing }
    }
}

impl<L: DirectoryListing> CaseResolver<L> {
    /// Create a resolver over the given listing.
    pub const fn new(listing: L) -> Self {
        Self { listing }
    }

    /// The listing this resolver reads from.
    pub const fn listing(&self) -> &L {
        &self.listing
    }

    /// Find the on-disk path matching `candidate` case-insensitively.
    ///
    /// Relative candidates are resolved against the working directory and
    /// stay relative in the result. `.` components are skipped; a `..`
    /// component never matches a directory entry, so such candidates do not
    /// resolve.
    ///
    /// Returns `None` when any segment is missing, when an intermediate
    /// segment is not a directory, or when a directory cannot be listed.
    pub fn resolve(&self, candidate: &Path) -> Option<PathBuf> {
        let mut current = PathBuf::new();

        for component in candidate.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    current.push(component.as_os_str());
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    log::debug!(
                        "not resolving {}: parent-directory segment",
                        candidate.display()
                    );
                    return None;
                }
                Component::Normal(segment) => {
                    let name = self.match_segment(&current, segment)?;
                    current.push(name);
                }
            }
        }

        if current.as_os_str().is_empty() || !self.listing.exists(&current) {
            return None;
        }
        Some(current)
    }

    fn match_segment(&self, dir: &Path, segment: &OsStr) -> Option<OsString> {
        let dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };

        if !self.listing.is_dir(dir) {
            return None;
        }

        let entries = match self.listing.entries(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("cannot list {}: {e}", dir.display());
                return None;
            }
        };

        select_entry(&entries, segment).cloned()
    }
}
