//! Per-file results of the lint and fix passes.

use std::path::PathBuf;

use serde::Serialize;

use crate::diagnostic::Diagnostic;

/// Result of linting a single file.
#[derive(Debug, Clone, Serialize)]
pub struct LintResult {
    /// Path to the file.
    pub path: PathBuf,
    /// Diagnostics, ordered by position.
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    /// Creates a new lint result.
    pub fn new(path: impl Into<PathBuf>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            path: path.into(),
            diagnostics,
        }
    }

    /// Returns true if there are no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Result of a fix attempt on a single file. The file itself is untouched.
#[derive(Debug, Clone, Serialize)]
pub struct FixResult {
    /// Path to the file.
    pub path: PathBuf,
    /// Source text with every applicable fix applied.
    pub output: String,
    /// Diagnostics whose fix was applied.
    pub applied: Vec<Diagnostic>,
    /// Diagnostics left as they were.
    pub remaining: Vec<Diagnostic>,
}

impl FixResult {
    /// Returns true if the fixed output differs from the source.
    pub fn is_modified(&self) -> bool {
        !self.applied.is_empty()
    }
}
