//! Directory-listing capability used by the case resolver.
//!
//! The resolver only ever needs three questions answered about the
//! filesystem: does a path exist, is it a directory, and what names does a
//! directory contain. [`DirectoryListing`] captures exactly that, with
//! [`OsListing`] backed by `std::fs` and [`MemoryListing`] backed by an
//! in-memory tree for tests and benchmarks.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only view of a directory tree.
pub trait DirectoryListing {
    /// Whether `path` exists (following symlinks).
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a directory (following symlinks).
    fn is_dir(&self, path: &Path) -> bool;

    /// Names of the entries directly inside `dir`, excluding `.` and `..`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be listed.
    fn entries(&self, dir: &Path) -> io::Result<Vec<OsString>>;
}

impl<L: DirectoryListing + ?Sized> DirectoryListing for &L {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn entries(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        (**self).entries(dir)
    }
}

/// The live filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsListing;

impl DirectoryListing for OsListing {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn entries(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    File,
    Dir,
}

/// An in-memory, case-sensitive directory tree.
///
/// Paths are stored exactly as given; intermediate directories are created
/// implicitly. Directories can be marked unreadable with [`MemoryListing::deny`]
/// to simulate permission failures.
///
/// # Examples
///
/// ```
/// use casefix::path::{DirectoryListing, MemoryListing};
/// use std::path::Path;
///
/// let fs = MemoryListing::new()
///     .with_file("/site/Images/Logo.png")
///     .with_dir("/site/Empty");
///
/// assert!(fs.is_dir(Path::new("/site/Images")));
/// assert!(fs.exists(Path::new("/site/Images/Logo.png")));
/// assert!(!fs.exists(Path::new("/site/images/logo.png")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryListing {
    nodes: BTreeMap<PathBuf, NodeKind>,
    denied: BTreeSet<PathBuf>,
}

impl MemoryListing {
    /// Create an empty tree (only the root exists).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular file, creating its parent directories.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.insert(path.to_path_buf(), NodeKind::File);
        self
    }

    /// Add a directory, creating its parent directories.
    #[must_use]
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.insert(path.to_path_buf(), NodeKind::Dir);
        self
    }

    /// Make listing `dir` fail with `PermissionDenied`.
    #[must_use]
    pub fn deny(mut self, dir: impl AsRef<Path>) -> Self {
        self.denied.insert(dir.as_ref().to_path_buf());
        self
    }

    fn add_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.parent().is_none() || ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes.insert(ancestor.to_path_buf(), NodeKind::Dir);
        }
    }

    fn is_root(path: &Path) -> bool {
        path.has_root() && path.parent().is_none()
    }
}

impl DirectoryListing for MemoryListing {
    fn exists(&self, path: &Path) -> bool {
        Self::is_root(path) || self.nodes.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        Self::is_root(path) || self.nodes.get(path) == Some(&NodeKind::Dir)
    }

    fn entries(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        if self.denied.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("listing {} is not permitted", dir.display()),
            ));
        }
        if !self.is_dir(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", dir.display()),
            ));
        }

        Ok(self
            .nodes
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name().map(ToOwned::to_owned))
            .collect())
    }
}
