//! Rewrite operations using the plan-execute pattern.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: reads a document and computes its corrected text
//!    ([`RewritePlanner`], producing [`DocumentPlan`]s)
//! 2. **Execution**: writes changed documents back and tallies the run
//!    ([`PlanExecutor`], producing a [`RunSummary`])
//!
//! [`process_directory`] drives both phases one document at a time.
//! [`RewritePlanner::build_plan`] plans a whole tree up front, which is
//! useful for previews.
//!
//! # Examples
//!
//! ```no_run
//! use casefix::discovery::DocumentFinder;
//! use casefix::operations::{PlanExecutor, RewritePlanner};
//! use casefix::path::CaseResolver;
//! use std::path::Path;
//!
//! let root = Path::new("site");
//! let resolver = CaseResolver::os();
//!
//! // Generate plan
//! let plan = RewritePlanner::new(&resolver, DocumentFinder::default())
//!     .build_plan(root)
//!     .unwrap();
//!
//! // Execute plan without writing
//! let summary = PlanExecutor::new(root).dry_run().execute(&plan).unwrap();
//! println!("{} documents would change", summary.rewritten);
//! ```

pub mod executor;
pub mod plan;
pub mod planner;
pub mod process;

pub use executor::{DocumentReport, PlanExecutor, RunSummary};
pub use plan::{DocumentPlan, RewritePlan, SkippedDocument};
pub use planner::{DiagnosticStream, DocumentOutcome, RewritePlanner};
pub use process::{process_directory, process_directory_with};
