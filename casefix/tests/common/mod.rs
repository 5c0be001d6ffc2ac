//! Common test utilities for integration tests.
//!
//! [`Site`] builds a throwaway directory tree of documents and assets.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary site directory.
pub struct Site {
    #[allow(dead_code)]
    dir: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl Site {
    /// Create an empty site.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().join("site");
        fs::create_dir(&root).expect("Failed to create site root");
        Self { dir, root }
    }

    /// Root directory of the site.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `relative` inside the site.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, relative: &str, contents: impl AsRef<[u8]>) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, contents).expect("Failed to write file");
        self
    }

    /// Create an empty asset.
    pub fn asset(&self, relative: &str) -> &Self {
        self.file(relative, [])
    }

    /// Read a document back as text.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read file")
    }

    /// Modification time of a file.
    pub fn modified(&self, relative: &str) -> std::time::SystemTime {
        fs::metadata(self.path(relative))
            .and_then(|m| m.modified())
            .expect("Failed to stat file")
    }
}

/// Whether the tests run as root, where permission bits are not enforced.
#[cfg(unix)]
#[allow(dead_code)]
pub fn running_as_root() -> bool {
    std::process::Command::new("id")
        .arg("-u")
        .output()
        .map(|out| String::from_utf8_lossy(&out.stdout).trim() == "0")
        .unwrap_or(false)
}
