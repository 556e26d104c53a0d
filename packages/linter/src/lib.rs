//! Advisory checks for level documents.
//!
//! Nothing here mutates a document or blocks an edit; every finding is a
//! [`Diagnostic`] the caller may show or ignore.

mod diagnostic;
mod index;
mod linter;
mod rules;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use index::{LevelIndex, Placement, RefSite};
pub use linter::{lint_document, validate, LintOptions};
pub use rules::{LintRule, RuleRegistry};
