//! Lexical path normalization for run roots.
//!
//! The root directory handed to a run is normalized before any document is
//! enumerated, so that every document path (and therefore every document
//! directory used as a resolution base) is absolute and free of `.`/`..`.
//! Nothing here touches the filesystem except for reading the working
//! directory and the home directory.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading `~` to the home directory.
///
/// `~` and `~/rest` are supported; `~user` is rejected.
///
/// # Errors
///
/// Returns an error if the path is not UTF-8, the home directory cannot be
/// determined, or `~user` syntax is used.
///
/// # Examples
///
/// ```
/// use casefix::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/site")).unwrap();
/// assert!(expanded.ends_with("site"));
///
/// assert_eq!(expand_tilde(Path::new("/srv/www")).unwrap(), Path::new("/srv/www"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        // Non-UTF-8 paths cannot start with a literal tilde we care about.
        return Ok(path.to_path_buf());
    };

    let Some(rest) = path_str.strip_prefix('~') else {
        return Ok(path.to_path_buf());
    };

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    if rest.is_empty() {
        Ok(home)
    } else if let Some(tail) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
        Ok(home.join(tail))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Remove `.` components and apply `..` components lexically.
///
/// Symlinks are not consulted, so `a/link/..` becomes `a` even if `link`
/// points elsewhere.
///
/// # Errors
///
/// Returns an error if a `..` would climb above the root.
///
/// # Examples
///
/// ```
/// use casefix::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/site/./docs/../img")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/site/img"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut anchored = false;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                anchored = true;
            }
            Component::RootDir => {
                result.push(component);
                anchored = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = result.file_name().is_some() && result.pop();
                if !popped {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "path contains too many '..' components (escapes root)"
                            .to_string(),
                    });
                }
            }
            Component::Normal(name) => result.push(name),
        }
    }

    if anchored && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Normalize a root path: expand `~`, make it absolute, resolve `.`/`..`.
///
/// # Errors
///
/// Returns an error if tilde expansion fails, the working directory cannot
/// be read, or the path escapes the filesystem root.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    resolve_components(&absolute)
}
