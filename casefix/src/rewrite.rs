//! Correcting the letter case of `src`/`href` references in HTML.
//!
//! [`ReferenceRewriter`] tokenizes a document, resolves every `src` and
//! `href` value against the document's directory, and replaces values whose
//! case differs from the real on-disk path. Only segment casing ever
//! changes: the authored separators (`./`, doubled or trailing slashes) are
//! kept, and references that do not resolve, that leave the document's
//! directory, or that are absolute or external are left exactly as written.

use std::borrow::Cow;
use std::env;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::html::{self, Token};
use crate::path::normalize::resolve_components;
use crate::path::{CaseResolver, DirectoryListing, OsListing};

/// Attribute names (compared ASCII case-insensitively) that carry a path.
pub const REFERENCE_ATTRIBUTES: [&str; 2] = ["src", "href"];

/// One corrected attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceChange {
    /// The owning tag, e.g. `<img>`.
    pub tag: String,
    /// Attribute name as authored (`SRC`, `href`, ...).
    pub attribute: String,
    /// Value before correction, character references decoded.
    pub original: String,
    /// Value after correction.
    pub corrected: String,
}

/// Result of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The serialized document.
    pub html: String,
    /// Every reference that was corrected, in document order.
    pub changes: Vec<ReferenceChange>,
}

/// Whether `value` names something outside the local filesystem: a URL with
/// a scheme (`https:`, `mailto:`, `data:`) or a protocol-relative `//host`.
///
/// Single-letter "schemes" are not treated as URLs, so `C:/x` is local.
///
/// # Examples
///
/// ```
/// use casefix::rewrite::is_external_reference;
///
/// assert!(is_external_reference("https://example.com/a.png"));
/// assert!(is_external_reference("//cdn.example.com/lib.js"));
/// assert!(is_external_reference("mailto:someone@example.com"));
/// assert!(!is_external_reference("images/a.png"));
/// ```
#[must_use]
pub fn is_external_reference(value: &str) -> bool {
    if value.starts_with("//") {
        return true;
    }
    let Some((scheme, _)) = value.split_once(':') else {
        return false;
    };
    scheme.len() >= 2
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Rebuild `authored` with its path segments replaced by the segments of
/// `relative`, keeping empty and `.` pieces as written.
///
/// Returns `None` when the two do not line up segment for segment.
fn rebuild_value<'a>(authored: &'a str, relative: &'a Path) -> Option<String> {
    let mut real = relative.components().map(|component| match component {
        Component::Normal(name) => name.to_str(),
        _ => None,
    });

    let mut pieces = Vec::new();
    for piece in authored.split('/') {
        if piece.is_empty() || piece == "." {
            pieces.push(piece);
        } else {
            pieces.push(real.next()??);
        }
    }
    if real.next().is_some() {
        return None;
    }
    Some(pieces.join("/"))
}

/// `dir` anchored at the working directory, without `.` or `..`.
///
/// Falls back to `dir` as given if the working directory is unavailable.
fn anchor(dir: &Path) -> PathBuf {
    let joined = if dir.has_root() {
        dir.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(dir),
            Err(e) => {
                log::debug!("cannot read working directory: {e}");
                return dir.to_path_buf();
            }
        }
    };
    resolve_components(&joined).unwrap_or(joined)
}

/// Rewrites references in HTML documents using a [`CaseResolver`].
///
/// # Examples
///
/// ```
/// use casefix::path::{CaseResolver, MemoryListing};
/// use casefix::rewrite::ReferenceRewriter;
/// use std::path::Path;
///
/// let resolver = CaseResolver::new(
///     MemoryListing::new()
///         .with_file("/site/Images/Test_Image.jpg")
///         .with_file("/site/SubDir/Page2.html"),
/// );
/// let rewriter = ReferenceRewriter::new(&resolver);
///
/// let html = r#"<img src="images/test_image.jpg"><a href="subdir/page2.HTML">x</a>"#;
/// assert_eq!(
///     rewriter.rewrite(html, Path::new("/site")),
///     r#"<img src="Images/Test_Image.jpg"><a href="SubDir/Page2.html">x</a>"#
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReferenceRewriter<'r, L = OsListing> {
    resolver: &'r CaseResolver<L>,
}

impl<'r, L: DirectoryListing> ReferenceRewriter<'r, L> {
    /// Create a rewriter that resolves through `resolver`.
    pub const fn new(resolver: &'r CaseResolver<L>) -> Self {
        Self { resolver }
    }

    /// Rewrite `html`, whose references are relative to `document_dir`.
    #[must_use]
    pub fn rewrite(&self, html: &str, document_dir: &Path) -> String {
        self.rewrite_with_report(html, document_dir).html
    }

    /// Rewrite `html` and report each corrected reference.
    ///
    /// A relative `document_dir` is taken relative to the working directory.
    #[must_use]
    pub fn rewrite_with_report(&self, html: &str, document_dir: &Path) -> RewriteOutcome {
        let document_dir = anchor(document_dir);
        let base = self
            .resolver
            .resolve(&document_dir)
            .unwrap_or(document_dir);

        let mut tokens = html::tokenize(html);
        let mut changes = Vec::new();

        for token in &mut tokens {
            let Token::StartTag(tag) = token else {
                continue;
            };
            let label = html::describe_tag(tag);

            for attr in tag.attributes_mut() {
                if !REFERENCE_ATTRIBUTES
                    .iter()
                    .any(|name| attr.name().eq_ignore_ascii_case(name))
                {
                    continue;
                }
                let Some(value) = attr.value().map(Cow::into_owned) else {
                    continue;
                };
                let Some(corrected) = self.correct_reference(&value, &base) else {
                    continue;
                };
                if corrected == value {
                    continue;
                }

                log::debug!("{label} {}: {value} -> {corrected}", attr.name());
                if attr.set_value(corrected.clone()) {
                    changes.push(ReferenceChange {
                        tag: label.clone(),
                        attribute: attr.name().to_string(),
                        original: value,
                        corrected,
                    });
                }
            }
        }

        RewriteOutcome {
            html: html::serialize(&tokens),
            changes,
        }
    }

    /// The case-corrected form of `value` relative to `base`, if it has one.
    ///
    /// Returns `None` for empty, absolute and external values, for values
    /// that do not resolve, and for values resolving outside `base`.
    #[must_use]
    pub fn correct_reference(&self, value: &str, base: &Path) -> Option<String> {
        if value.is_empty() || is_external_reference(value) || Path::new(value).has_root() {
            return None;
        }

        let resolved = self.resolver.resolve(&base.join(value))?;
        let relative = resolved.strip_prefix(base).ok()?;
        rebuild_value(value, relative)
    }
}

/// Rewrite `html` against the live filesystem.
///
/// Shorthand for a [`ReferenceRewriter`] over [`CaseResolver::os`].
#[must_use]
pub fn rewrite(html: &str, document_dir: &Path) -> String {
    ReferenceRewriter::new(&CaseResolver::os()).rewrite(html, document_dir)
}
