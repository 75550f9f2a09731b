//! The structured report handed to AI tools.

use std::path::Path;

use aifix_core::{Diagnostic, Location, Position};
use serde::Serialize;

/// One finding, with the offending text and the suggested replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub line: u32,
    pub column: u32,
    pub rule: String,
    pub message: String,
    pub before: String,
    /// Replacement text, or `null` when the rule offers no fix.
    pub after: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Absolute path of the linted file.
    pub file: String,
    pub issues: Vec<Issue>,
}

impl Report {
    /// Builds the report for `content`, the text the diagnostics refer to.
    pub fn new(file: &Path, content: &str, diagnostics: &[Diagnostic]) -> Self {
        let lines: Vec<&str> = content.split('\n').collect();
        let issues = diagnostics
            .iter()
            .map(|diagnostic| Issue::new(diagnostic, &lines))
            .collect();

        Self {
            file: file.to_string_lossy().into_owned(),
            issues,
        }
    }
}

impl Issue {
    fn new(diagnostic: &Diagnostic, lines: &[&str]) -> Self {
        let loc = diagnostic
            .loc
            .unwrap_or_else(|| Location::new(Position::new(1, 1), Position::new(1, 1)));

        Self {
            line: loc.start.line,
            column: loc.start.column,
            rule: diagnostic.rule_id.clone(),
            message: diagnostic.message.clone(),
            before: extract_text(lines, &loc),
            after: diagnostic.fix.as_ref().map(|fix| fix.text.clone()),
        }
    }
}

/// Returns the text covered by `loc`.
///
/// Columns are 1-based character offsets and the end is exclusive. Lines past
/// the end of the text read as empty and columns are clamped to the line.
pub fn extract_text(lines: &[&str], loc: &Location) -> String {
    let line = |number: u32| line_at(lines, number);
    let start_column = loc.start.column.saturating_sub(1) as usize;
    let end_column = loc.end.column.saturating_sub(1) as usize;

    if loc.start.line == loc.end.line {
        return char_slice(line(loc.start.line), start_column, Some(end_column)).to_string();
    }

    let mut parts = Vec::new();
    for number in loc.start.line..=loc.end.line {
        let text = line(number);
        let part = if number == loc.start.line {
            char_slice(text, start_column, None)
        } else if number == loc.end.line {
            char_slice(text, 0, Some(end_column))
        } else {
            text
        };
        parts.push(part);
    }
    parts.join("\n")
}

fn line_at<'a>(lines: &[&'a str], number: u32) -> &'a str {
    (number as usize)
        .checked_sub(1)
        .and_then(|index| lines.get(index))
        .copied()
        .unwrap_or("")
}

/// Slices `text` by character offsets, clamping both ends. Reversed offsets
/// are swapped.
fn char_slice(text: &str, start: usize, end: Option<usize>) -> &str {
    let byte_offset = |chars: usize| {
        text.char_indices()
            .nth(chars)
            .map_or(text.len(), |(offset, _)| offset)
    };

    let (start, end) = match end {
        Some(end) => (byte_offset(start.min(end)), byte_offset(start.max(end))),
        None => (byte_offset(start), text.len()),
    };
    &text[start..end]
}
