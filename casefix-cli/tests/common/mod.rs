//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated site directory and a command builder for the
//! `casefix` binary.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated site directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Root of the site under test
    pub site: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty site.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let site = temp_dir.path().join("site");
        fs::create_dir(&site).expect("Failed to create site directory");
        Self { temp_dir, site }
    }

    /// A site with mixed-case assets and documents referencing them in the
    /// wrong case.
    pub fn with_fixture() -> Self {
        let env = Self::new();
        env.write("Images/Test_Image.jpg", "");
        env.write("SubDir/Page2.html", "<p>second</p>\n");
        env.write(
            "index.html",
            "<img src=\"images/test_image.jpg\">\n<a href=\"subdir/page2.html\">next</a>\n",
        );
        env.write("notes.html", "<a href=\"https://example.com/X.html\">x</a>\n");
        env
    }

    /// Get a command builder with environment overrides cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("casefix").expect("Failed to find casefix binary");
        for var in [
            "CASEFIX_ROOT",
            "CASEFIX_DRY_RUN",
            "CASEFIX_EXTENSIONS",
            "CASEFIX_FOLLOW_SYMLINKS",
            "CASEFIX_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Path of `relative` inside the site.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.site.join(relative)
    }

    /// Write a file (creating parent directories).
    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Read a file from the site.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read test file")
    }

    /// Site root.
    pub fn root(&self) -> &Path {
        &self.site
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
