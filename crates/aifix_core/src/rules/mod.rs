//! Built-in AI-writing rules.
//!
//! Each rule scans a [`Document`] and reports through a [`RuleContext`],
//! which takes care of code spans, `allows` and locations so the rules only
//! deal with pattern matching.

mod colon_continuation;
mod emphasis_patterns;
mod hype_expressions;
mod list_formatting;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::LinterError;
use crate::config::RuleEntry;
use crate::diagnostic::{Diagnostic, Fix, Severity};
use crate::document::Document;
use crate::span::Span;

pub use colon_continuation::ColonContinuation;
pub use emphasis_patterns::EmphasisPatterns;
pub use hype_expressions::HypeExpressions;
pub use list_formatting::ListFormatting;

/// Names of every built-in rule, in the order a preset enables them.
pub const BUILTIN_RULES: &[&str] = &[
    ListFormatting::NAME,
    HypeExpressions::NAME,
    EmphasisPatterns::NAME,
    ColonContinuation::NAME,
];

/// Returns true if `name` is a built-in rule.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_RULES.contains(&name)
}

/// A lint rule.
pub trait Rule: Send + Sync {
    /// Returns the rule name.
    fn name(&self) -> &'static str;

    /// Returns true if the rule attaches fixes to its diagnostics.
    fn is_fixable(&self) -> bool {
        false
    }

    /// Checks the document and reports findings to `ctx`.
    fn check(&self, document: &Document<'_>, ctx: &mut RuleContext<'_>);
}

/// Options every rule understands.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommonOptions {
    /// Matches containing any of these strings are not reported.
    pub allows: Vec<String>,
}

/// Instantiates the rule behind a configuration entry.
pub fn create(entry: &RuleEntry) -> Result<Box<dyn Rule>, LinterError> {
    let rule: Box<dyn Rule> = match entry.name.as_str() {
        ListFormatting::NAME => Box::new(ListFormatting::new(parse_options(entry)?)),
        HypeExpressions::NAME => Box::new(HypeExpressions::new(parse_options(entry)?)),
        EmphasisPatterns::NAME => Box::new(EmphasisPatterns::new()),
        ColonContinuation::NAME => Box::new(ColonContinuation::new()),
        other => {
            return Err(LinterError::config(format!("Unknown rule: {}", other)));
        }
    };
    Ok(rule)
}

/// Deserializes rule options, treating `null` as "all defaults".
pub fn parse_options<T: DeserializeOwned + Default>(entry: &RuleEntry) -> Result<T, LinterError> {
    match &entry.options {
        Value::Null => Ok(T::default()),
        value => serde_json::from_value(value.clone()).map_err(|e| {
            LinterError::config(format!("Invalid options for '{}': {}", entry.id, e))
        }),
    }
}

/// Collects diagnostics for one rule run.
pub struct RuleContext<'a> {
    document: &'a Document<'a>,
    rule_id: &'a str,
    severity: Severity,
    allows: &'a [String],
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RuleContext<'a> {
    /// Creates a context reporting under `rule_id`.
    pub fn new(
        document: &'a Document<'a>,
        rule_id: &'a str,
        severity: Severity,
        allows: &'a [String],
    ) -> Self {
        Self {
            document,
            rule_id,
            severity,
            allows,
            diagnostics: Vec::new(),
        }
    }

    /// Reports a finding at `span`.
    pub fn report(&mut self, span: Span, message: impl Into<String>) {
        if let Some(diagnostic) = self.build(span, message) {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Reports a finding at `span` with a replacement for the same span.
    pub fn report_with_fix(
        &mut self,
        span: Span,
        message: impl Into<String>,
        replacement: impl Into<String>,
    ) {
        if let Some(diagnostic) = self.build(span, message) {
            self.diagnostics
                .push(diagnostic.with_fix(Fix::new(span, replacement)));
        }
    }

    /// Consumes the context and returns the collected diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn build(&self, span: Span, message: impl Into<String>) -> Option<Diagnostic> {
        if self.document.is_ignored(span) {
            return None;
        }

        let matched = &self.document.source()[span.start as usize..span.end as usize];
        if self.allows.iter().any(|allow| matched.contains(allow.as_str())) {
            return None;
        }

        Some(
            Diagnostic::new(self.rule_id, message, span)
                .with_severity(self.severity)
                .with_location(self.document.location(span)),
        )
    }
}

/// Runs a rule over `source` with default options. Used by rule tests.
#[cfg(test)]
pub(crate) fn run_rule(rule: &dyn Rule, source: &str) -> Vec<Diagnostic> {
    use crate::document::Syntax;

    let document = Document::parse(source, Syntax::Markdown).unwrap();
    let mut ctx = RuleContext::new(&document, rule.name(), Severity::Error, &[]);
    rule.check(&document, &mut ctx);
    ctx.into_diagnostics()
}
