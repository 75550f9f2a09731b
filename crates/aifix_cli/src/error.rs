//! Errors that end a run with `Error: <message>`.

use std::path::PathBuf;

use aifix_core::LinterError;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CliError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("No result from linting engine")]
    NoLintResult,
    #[error("No result from linting engine fix pass")]
    NoFixResult,
    #[error("{0}")]
    Linter(#[from] LinterError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
