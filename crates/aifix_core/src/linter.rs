//! Core linter engine.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::LinterError;
use crate::config::RuleDescriptor;
use crate::diagnostic::{Diagnostic, Severity};
use crate::document::{Document, Syntax};
use crate::fixer::apply_fixes_to_content;
use crate::result::{FixResult, LintResult};
use crate::rules::{self, CommonOptions, Rule, RuleContext};

/// Successful results and failed files with their errors.
pub type LintFilesResult<T> = (Vec<T>, Vec<(PathBuf, LinterError)>);

/// A rule instance bound to its configured id.
struct LoadedRule {
    id: String,
    severity: Severity,
    allows: Vec<String>,
    rule: Box<dyn Rule>,
}

/// The core linter engine.
///
/// Holds the rules of one [`RuleDescriptor`]; linting never mutates it, so a
/// single `Linter` is shared across worker threads.
pub struct Linter {
    rules: Vec<LoadedRule>,
}

impl Linter {
    /// Instantiates every rule of the descriptor.
    pub fn new(descriptor: &RuleDescriptor) -> Result<Self, LinterError> {
        let mut loaded = Vec::with_capacity(descriptor.rules.len());

        for entry in &descriptor.rules {
            let rule = rules::create(entry)?;
            let common: CommonOptions = rules::parse_options(entry)?;
            debug!(
                "Loaded rule '{}' (fixable: {})",
                entry.id,
                rule.is_fixable()
            );
            loaded.push(LoadedRule {
                id: entry.id.clone(),
                severity: entry.severity,
                allows: common.allows,
                rule,
            });
        }

        if descriptor.is_empty() {
            warn!("No rules enabled");
        }

        Ok(Self { rules: loaded })
    }

    /// Lints a source text.
    ///
    /// Diagnostics are ordered by start offset, then rule id.
    pub fn lint_source(&self, source: &str, syntax: Syntax) -> Result<Vec<Diagnostic>, LinterError> {
        let document = Document::parse(source, syntax)?;
        let mut diagnostics = Vec::new();

        for loaded in &self.rules {
            let mut ctx = RuleContext::new(&document, &loaded.id, loaded.severity, &loaded.allows);
            loaded.rule.check(&document, &mut ctx);
            diagnostics.extend(ctx.into_diagnostics());
        }

        diagnostics.sort_by(|a, b| {
            a.span
                .start
                .cmp(&b.span.start)
                .then_with(|| a.rule_id.cmp(&b.rule_id))
        });
        Ok(diagnostics)
    }

    /// Lints a single file.
    pub fn lint_file(&self, path: &Path) -> Result<LintResult, LinterError> {
        debug!("Linting {}", path.display());
        let content = read_source(path)?;
        let diagnostics = self.lint_source(&content, syntax_of(path))?;
        Ok(LintResult::new(path, diagnostics))
    }

    /// Lints a list of files in parallel using rayon.
    ///
    /// Results keep the order of `paths`.
    pub fn lint_files(&self, paths: &[PathBuf]) -> LintFilesResult<LintResult> {
        let results = paths
            .par_iter()
            .map(|path| self.lint_file(path).map_err(|e| (path.clone(), e)))
            .collect::<Vec<_>>();

        let (successes, failures) = partition(results);
        info!(
            "Linted {} file(s), {} failed",
            successes.len(),
            failures.len()
        );
        (successes, failures)
    }

    /// Computes the fixed text of a single file without writing it.
    pub fn fix_file(&self, path: &Path) -> Result<FixResult, LinterError> {
        let content = read_source(path)?;
        let diagnostics = self.lint_source(&content, syntax_of(path))?;
        let fixed = apply_fixes_to_content(&content, &diagnostics);
        debug!(
            "{} fix(es) applicable to {}",
            fixed.fixes_applied,
            path.display()
        );

        let mut applied = Vec::with_capacity(fixed.applied.len());
        let mut remaining = Vec::new();
        for (index, diagnostic) in diagnostics.into_iter().enumerate() {
            if fixed.applied.contains(&index) {
                applied.push(diagnostic);
            } else {
                remaining.push(diagnostic);
            }
        }

        Ok(FixResult {
            path: path.to_path_buf(),
            output: fixed.fixed_content,
            applied,
            remaining,
        })
    }

    /// Computes fixes for a list of files in parallel. Nothing is written.
    pub fn fix_files(&self, paths: &[PathBuf]) -> LintFilesResult<FixResult> {
        let results = paths
            .par_iter()
            .map(|path| self.fix_file(path).map_err(|e| (path.clone(), e)))
            .collect::<Vec<_>>();

        partition(results)
    }
}

fn read_source(path: &Path) -> Result<String, LinterError> {
    fs::read_to_string(path)
        .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))
}

fn syntax_of(path: &Path) -> Syntax {
    Syntax::from_extension(path.extension().and_then(|ext| ext.to_str()))
}

fn partition<T>(results: Vec<Result<T, (PathBuf, LinterError)>>) -> LintFilesResult<T> {
    let mut successes = Vec::new();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(value) => successes.push(value),
            Err((path, error)) => {
                warn!("Failed to lint {}: {}", path.display(), error);
                failures.push((path, error));
            }
        }
    }
    (successes, failures)
}
