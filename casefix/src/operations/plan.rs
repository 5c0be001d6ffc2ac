//! Plan types for rewrite operations.
//!
//! A plan describes what a run would change without touching any file:
//! the original and corrected text of every document, and the documents
//! that had to be skipped.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::rewrite::ReferenceChange;

/// The computed rewrite of a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPlan {
    /// Path of the document.
    pub path: PathBuf,
    /// Content as read from disk.
    pub original: String,
    /// Content after correction.
    pub corrected: String,
    /// Corrected references, in document order.
    pub changes: Vec<ReferenceChange>,
}

impl DocumentPlan {
    /// Whether writing this plan would modify the file.
    ///
    /// This can be true with no reference changes when only self-closing
    /// tags were normalized.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.original != self.corrected
    }

    /// A human-readable description of this plan.
    #[must_use]
    pub fn description(&self) -> String {
        match (self.is_changed(), self.changes.len()) {
            (false, _) => format!("Leave {} unchanged", self.path.display()),
            (true, 0) => format!("Normalize markup in {}", self.path.display()),
            (true, 1) => format!("Correct 1 reference in {}", self.path.display()),
            (true, n) => format!("Correct {n} references in {}", self.path.display()),
        }
    }
}

/// A document that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDocument {
    /// Path of the document.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: String,
}

/// Plans for every document under a root.
///
/// # Examples
///
/// ```
/// use casefix::operations::{DocumentPlan, RewritePlan};
/// use std::path::PathBuf;
///
/// let plan = RewritePlan::new("/site").add_document(DocumentPlan {
///     path: PathBuf::from("/site/index.html"),
///     original: "<br/>".to_string(),
///     corrected: "<br>".to_string(),
///     changes: Vec::new(),
/// });
/// assert_eq!(plan.changed().count(), 1);
/// assert!(!plan.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RewritePlan {
    /// The directory that was scanned.
    pub root: PathBuf,
    /// Every document that was read, changed or not.
    pub documents: Vec<DocumentPlan>,
    /// Documents that were skipped.
    pub skipped: Vec<SkippedDocument>,
}

impl RewritePlan {
    /// Creates an empty plan for `root`.
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            documents: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Adds a document plan.
    #[must_use]
    pub fn add_document(mut self, document: DocumentPlan) -> Self {
        self.documents.push(document);
        self
    }

    /// Records a skipped document.
    #[must_use]
    pub fn add_skipped(mut self, skipped: SkippedDocument) -> Self {
        self.skipped.push(skipped);
        self
    }

    /// Documents whose content would change.
    pub fn changed(&self) -> impl Iterator<Item = &DocumentPlan> {
        self.documents.iter().filter(|doc| doc.is_changed())
    }

    /// Whether executing the plan would write nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed().next().is_none()
    }

    /// Number of documents found, including skipped ones.
    #[must_use]
    pub fn scanned(&self) -> usize {
        self.documents.len() + self.skipped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(original: &str, corrected: &str, changes: usize) -> DocumentPlan {
        let change = ReferenceChange {
            tag: "<img>".into(),
            attribute: "src".into(),
            original: "a.png".into(),
            corrected: "A.png".into(),
        };
        DocumentPlan {
            path: PathBuf::from("/site/index.html"),
            original: original.into(),
            corrected: corrected.into(),
            changes: vec![change; changes],
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            doc("x", "x", 0).description(),
            "Leave /site/index.html unchanged"
        );
        assert_eq!(
            doc("<br/>", "<br>", 0).description(),
            "Normalize markup in /site/index.html"
        );
        assert_eq!(
            doc("a", "A", 1).description(),
            "Correct 1 reference in /site/index.html"
        );
        assert_eq!(
            doc("a a", "A A", 2).description(),
            "Correct 2 references in /site/index.html"
        );
    }

    #[test]
    fn test_plan_counts() {
        let plan = RewritePlan::new("/site")
            .add_document(doc("same", "same", 0))
            .add_document(doc("a", "A", 1))
            .add_skipped(SkippedDocument {
                path: PathBuf::from("/site/latin1.html"),
                reason: "invalid utf-8".into(),
            });

        assert_eq!(plan.scanned(), 3);
        assert_eq!(plan.changed().count(), 1);
        assert!(!plan.is_empty());
        assert!(RewritePlan::new("/site").add_document(doc("s", "s", 0)).is_empty());
    }
}
