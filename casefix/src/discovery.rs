//! Finding the HTML documents under a root directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions treated as HTML when none are configured.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Walks a directory tree for documents with matching extensions.
///
/// Entries are visited in file-name order, so the sequence is deterministic
/// for a given tree. Symlinked directories are followed unless disabled.
///
/// # Examples
///
/// ```no_run
/// use casefix::discovery::DocumentFinder;
/// use std::path::Path;
///
/// let finder = DocumentFinder::new(["html", "xhtml"]).follow_symlinks(false);
/// for document in finder.find(Path::new("site")) {
///     println!("{}", document.display());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFinder {
    extensions: Vec<String>,
    follow_symlinks: bool,
}

impl Default for DocumentFinder {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl DocumentFinder {
    /// Match files whose extension is one of `extensions`, ignoring ASCII
    /// case. A leading `.` on an extension is ignored.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
                .collect(),
            follow_symlinks: true,
        }
    }

    /// Whether to descend into symlinked directories (default `true`).
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// The extensions this finder accepts.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether `path` has one of the accepted extensions.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|wanted| wanted.eq_ignore_ascii_case(ext))
    }

    /// Lazily enumerate matching regular files under `root`.
    #[must_use]
    pub fn find(&self, root: &Path) -> HtmlFiles {
        let walker = WalkDir::new(root)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
            .into_iter();
        HtmlFiles {
            walker,
            finder: self.clone(),
        }
    }
}

/// Iterator over documents found by [`DocumentFinder::find`].
///
/// Entries that cannot be read (permission errors, symlink loops) are
/// logged as warnings and skipped.
pub struct HtmlFiles {
    walker: walkdir::IntoIter,
    finder: DocumentFinder,
}

impl std::fmt::Debug for HtmlFiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlFiles")
            .field("finder", &self.finder)
            .finish_non_exhaustive()
    }
}

impl Iterator for HtmlFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.walker.next()? {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.finder.matches(entry.path()) {
                        return Some(entry.into_path());
                    }
                }
                Err(e) => log::warn!("skipping during scan: {e}"),
            }
        }
    }
}

/// Find `.html`/`.htm` documents under `root`, following symlinks.
#[must_use]
pub fn find_html_files(root: &Path) -> HtmlFiles {
    DocumentFinder::default().find(root)
}
