//! Processing a whole directory tree.

use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::{CaseResolver, DirectoryListing};

use super::executor::{PlanExecutor, RunSummary};
use super::planner::{DiagnosticStream, DocumentOutcome, RewritePlanner};

/// Correct every document under `root` against the live filesystem.
///
/// Documents are handled one at a time: each is read, rewritten in memory
/// and (unless `config` asks for a dry run) written back before the next is
/// read.
///
/// # Errors
///
/// Returns [`Error::NotADirectory`] if `root` is not a directory,
/// [`Error::PermissionDenied`] if a document cannot be read or written, and
/// [`Error::FileIo`] for other read or write failures. Documents that are
/// not UTF-8 are skipped, not reported as errors.
///
/// # Examples
///
/// ```no_run
/// use casefix::config::Config;
/// use casefix::operations::process_directory;
/// use std::path::Path;
///
/// let summary = process_directory(Path::new("site"), &Config::default()).unwrap();
/// println!("{} documents rewritten", summary.rewritten);
/// ```
pub fn process_directory(root: &Path, config: &Config) -> Result<RunSummary> {
    process_directory_with(root, config, &CaseResolver::os(), DiagnosticStream::Stdout)
}

/// [`process_directory`] with an explicit resolver and a choice of stream
/// for skip diagnostics.
///
/// # Errors
///
/// See [`process_directory`].
pub fn process_directory_with<L: DirectoryListing>(
    root: &Path,
    config: &Config,
    resolver: &CaseResolver<L>,
    diagnostics: DiagnosticStream,
) -> Result<RunSummary> {
    if !root.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let planner =
        RewritePlanner::new(resolver, config.document_finder()).diagnostics(diagnostics);
    let mut executor = PlanExecutor::new(root);
    if config.dry_run() {
        executor = executor.dry_run();
    }

    log::info!("scanning {}", root.display());
    for path in planner.finder().find(root) {
        match planner.plan_or_skip(&path)? {
            DocumentOutcome::Planned(document) => executor.apply(&document)?,
            DocumentOutcome::Skipped(skipped) => executor.skip(skipped),
        }
    }

    let summary = executor.finish();
    log::info!(
        "{} of {} documents {}, {} references corrected",
        summary.rewritten,
        summary.scanned,
        if summary.dry_run {
            "would change"
        } else {
            "changed"
        },
        summary.references_corrected
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_root_must_be_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("index.html");
        fs::write(&file, "<p>").unwrap();

        let err = process_directory(&file, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));

        let err = process_directory(&dir.path().join("absent"), &Config::default()).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn test_processes_and_reports() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("Images")).unwrap();
        fs::write(dir.path().join("Images").join("Logo.png"), "").unwrap();
        fs::write(dir.path().join("index.html"), r#"<img src="images/logo.png"/>"#).unwrap();
        fs::write(dir.path().join("about.html"), "<p>nothing</p>").unwrap();

        let summary = process_directory(dir.path(), &Config::default()).unwrap();

        assert_eq!(summary.scanned, 2);
        assert_eq!(summary.rewritten, 1);
        assert_eq!(summary.references_corrected, 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("index.html")).unwrap(),
            r#"<img src="Images/Logo.png">"#
        );
    }

    #[test]
    fn test_dry_run_from_config() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<br/>").unwrap();

        let config = Config {
            dry_run: Some(true),
            ..Default::default()
        };
        let summary = process_directory(dir.path(), &config).unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.rewritten, 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("index.html")).unwrap(),
            "<br/>"
        );
    }

    #[test]
    fn test_configured_extensions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("page.xhtml"), "<br/>").unwrap();
        fs::write(dir.path().join("page.html"), "<br/>").unwrap();

        let config = Config {
            extensions: Some(vec!["xhtml".into()]),
            ..Default::default()
        };
        let summary = process_directory(dir.path(), &config).unwrap();

        assert_eq!(summary.scanned, 1);
        assert_eq!(fs::read_to_string(dir.path().join("page.xhtml")).unwrap(), "<br>");
        assert_eq!(fs::read_to_string(dir.path().join("page.html")).unwrap(), "<br/>");
    }
}
