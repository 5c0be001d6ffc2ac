//! Plan execution engine.
//!
//! The executor writes corrected documents back to disk and keeps the
//! running [`RunSummary`]. Documents whose text did not change are never
//! written, so their modification times are left alone.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::rewrite::ReferenceChange;

use super::plan::{DocumentPlan, RewritePlan, SkippedDocument};

/// A document that was (or in a dry run, would have been) rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    /// Path of the document.
    pub path: PathBuf,
    /// Whether the file was actually written.
    pub written: bool,
    /// Corrected references.
    pub changes: Vec<ReferenceChange>,
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// The directory that was processed.
    pub root: PathBuf,
    /// Whether this was a dry run (no files written).
    pub dry_run: bool,
    /// Documents found, including skipped ones.
    pub scanned: usize,
    /// Documents whose content changed.
    pub rewritten: usize,
    /// References corrected across all documents.
    pub references_corrected: usize,
    /// One entry per changed document.
    pub documents: Vec<DocumentReport>,
    /// Documents that could not be processed.
    pub skipped: Vec<SkippedDocument>,
}

impl RunSummary {
    /// An empty summary for `root`.
    #[must_use]
    pub fn new(root: impl AsRef<Path>, dry_run: bool) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            dry_run,
            scanned: 0,
            rewritten: 0,
            references_corrected: 0,
            documents: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Whether the run changed (or would change) nothing.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rewritten == 0
    }
}

/// Applies document plans to the filesystem.
///
/// # Examples
///
/// ```no_run
/// use casefix::operations::{PlanExecutor, RewritePlan};
///
/// let plan = RewritePlan::new("/site");
///
/// // Normal execution
/// let summary = PlanExecutor::new("/site").execute(&plan).unwrap();
/// assert!(!summary.dry_run);
///
/// // Dry-run execution
/// let summary = PlanExecutor::new("/site").dry_run().execute(&plan).unwrap();
/// assert!(summary.dry_run);
/// ```
#[derive(Debug)]
pub struct PlanExecutor {
    dry_run: bool,
    summary: RunSummary,
}

impl PlanExecutor {
    /// Creates an executor for a run over `root`.
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            dry_run: false,
            summary: RunSummary::new(root, false),
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, changes are reported but no file is written.
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self.summary.dry_run = true;
        self
    }

    /// Apply one document plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PermissionDenied`] if the document cannot be written
    /// for lack of permission and [`Error::FileIo`] for other write failures.
    pub fn apply(&mut self, document: &DocumentPlan) -> Result<()> {
        self.summary.scanned += 1;

        if !document.is_changed() {
            log::debug!("{}", document.description());
            return Ok(());
        }

        if self.dry_run {
            log::info!("would {}", document.description().to_lowercase());
        } else {
            fs::write(&document.path, &document.corrected)
                .map_err(|e| Error::from_file_io(&document.path, e))?;
            log::info!("{}", document.description());
        }

        self.summary.rewritten += 1;
        self.summary.references_corrected += document.changes.len();
        self.summary.documents.push(DocumentReport {
            path: document.path.clone(),
            written: !self.dry_run,
            changes: document.changes.clone(),
        });
        Ok(())
    }

    /// Record a document that was skipped.
    pub fn skip(&mut self, skipped: SkippedDocument) {
        self.summary.scanned += 1;
        self.summary.skipped.push(skipped);
    }

    /// Apply a whole plan and return the summary.
    ///
    /// # Errors
    ///
    /// Stops at the first write failure; see [`PlanExecutor::apply`].
    pub fn execute(mut self, plan: &RewritePlan) -> Result<RunSummary> {
        for document in &plan.documents {
            self.apply(document)?;
        }
        for skipped in &plan.skipped {
            self.skip(skipped.clone());
        }
        Ok(self.finish())
    }

    /// Finish the run and return the summary.
    #[must_use]
    pub fn finish(self) -> RunSummary {
        self.summary
    }
}
