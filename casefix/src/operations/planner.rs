//! Planning rewrites: reading documents and computing their corrected text.

use std::fs;
use std::path::Path;

use crate::discovery::DocumentFinder;
use crate::error::{Error, Result};
use crate::path::{CaseResolver, DirectoryListing, OsListing};
use crate::rewrite::ReferenceRewriter;

use super::plan::{DocumentPlan, RewritePlan, SkippedDocument};

/// What happened when planning one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// The document was read and its rewrite computed.
    Planned(DocumentPlan),
    /// The document could not be decoded and was skipped.
    Skipped(SkippedDocument),
}

/// Where the `Error processing <path>: <reason>` line for a skipped
/// document is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagnosticStream {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error, for when standard output carries machine-readable
    /// data.
    Stderr,
}

/// Reads documents and computes their rewrites.
///
/// # Examples
///
/// ```no_run
/// use casefix::discovery::DocumentFinder;
/// use casefix::operations::RewritePlanner;
/// use casefix::path::CaseResolver;
/// use std::path::Path;
///
/// let resolver = CaseResolver::os();
/// let planner = RewritePlanner::new(&resolver, DocumentFinder::default());
/// let plan = planner.build_plan(Path::new("site")).unwrap();
/// for doc in plan.changed() {
///     println!("{}", doc.description());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RewritePlanner<'r, L = OsListing> {
    rewriter: ReferenceRewriter<'r, L>,
    finder: DocumentFinder,
    diagnostics: DiagnosticStream,
}

impl<'r, L: DirectoryListing> RewritePlanner<'r, L> {
    /// Creates a planner resolving through `resolver` and scanning with
    /// `finder`.
    pub const fn new(resolver: &'r CaseResolver<L>, finder: DocumentFinder) -> Self {
        Self {
            rewriter: ReferenceRewriter::new(resolver),
            finder,
            diagnostics: DiagnosticStream::Stdout,
        }
    }

    /// Print skip diagnostics to `stream` (default standard output).
    #[must_use]
    pub const fn diagnostics(mut self, stream: DiagnosticStream) -> Self {
        self.diagnostics = stream;
        self
    }

    /// The finder used to enumerate documents.
    pub const fn finder(&self) -> &DocumentFinder {
        &self.finder
    }

    /// Read `path` and compute its rewrite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PermissionDenied`] if the file cannot be read for
    /// lack of permission, [`Error::FileIo`] for other read failures, and
    /// [`Error::Decode`] if the content is not UTF-8.
    pub fn plan_document(&self, path: &Path) -> Result<DocumentPlan> {
        let bytes = fs::read(path).map_err(|e| Error::from_file_io(path, e))?;
        let original = String::from_utf8(bytes).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let document_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let outcome = self.rewriter.rewrite_with_report(&original, document_dir);

        Ok(DocumentPlan {
            path: path.to_path_buf(),
            original,
            corrected: outcome.html,
            changes: outcome.changes,
        })
    }

    /// Plan `path`, turning decode failures into a skip.
    ///
    /// A skipped document is reported as `Error processing <path>: <reason>`
    /// on the configured [`DiagnosticStream`].
    ///
    /// # Errors
    ///
    /// Returns every error from [`RewritePlanner::plan_document`] except
    /// decode failures.
    pub fn plan_or_skip(&self, path: &Path) -> Result<DocumentOutcome> {
        match self.plan_document(path) {
            Ok(plan) => Ok(DocumentOutcome::Planned(plan)),
            Err(Error::Decode { path, source }) => {
                match self.diagnostics {
                    DiagnosticStream::Stdout => {
                        println!("Error processing {}: {source}", path.display());
                    }
                    DiagnosticStream::Stderr => {
                        eprintln!("Error processing {}: {source}", path.display());
                    }
                }
                log::warn!("skipped {}: not valid UTF-8", path.display());
                Ok(DocumentOutcome::Skipped(SkippedDocument {
                    path,
                    reason: source.to_string(),
                }))
            }
            Err(e) => Err(e),
        }
    }

    /// Plan every document under `root`.
    ///
    /// All documents are read before anything is written, so this is meant
    /// for previews; a run uses [`crate::operations::process_directory`],
    /// which handles one document at a time.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error; see [`RewritePlanner::plan_or_skip`].
    pub fn build_plan(&self, root: &Path) -> Result<RewritePlan> {
        let mut plan = RewritePlan::new(root);
        for path in self.finder.find(root) {
            plan = match self.plan_or_skip(&path)? {
                DocumentOutcome::Planned(doc) => plan.add_document(doc),
                DocumentOutcome::Skipped(skipped) => plan.add_skipped(skipped),
            };
        }
        Ok(plan)
    }
}
