//! # aifix_core
//!
//! Linter engine behind `ai-fix`.
//!
//! This crate provides:
//! - textlintrc-style rule descriptors, with preset expansion
//! - a Markdown-aware document model that keeps code out of rule matching
//! - the built-in AI-writing rules
//! - parallel lint and fix passes through [`Linter`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use aifix_core::{Linter, RuleDescriptor};
//!
//! let descriptor = RuleDescriptor::from_file(".textlintrc")?;
//! let linter = Linter::new(&descriptor)?;
//!
//! let (results, _failures) = linter.lint_files(&["README.md".into()]);
//! for result in results {
//!     println!("{}: {} issues", result.path.display(), result.diagnostics.len());
//! }
//! ```

mod config;
mod diagnostic;
mod document;
mod error;
mod fixer;
mod linter;
mod result;
pub mod rules;
mod span;

pub use config::{
    DEFAULT_PRESET, RuleDescriptor, RuleEntry, RuleOption, TextlintConfig, default_config,
};
pub use diagnostic::{Diagnostic, Fix, Severity};
pub use document::{Document, Line, Syntax};
pub use error::LinterError;
pub use fixer::{FixerResult, apply_fixes_to_content};
pub use linter::{LintFilesResult, Linter};
pub use result::{FixResult, LintResult};
pub use span::{Location, Position, Span};
