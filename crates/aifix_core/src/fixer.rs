//! Applies diagnostic fixes to source text in memory.

use tracing::{debug, warn};

use crate::diagnostic::{Diagnostic, Fix};

/// Outcome of applying fixes to a source text.
#[derive(Debug)]
pub struct FixerResult {
    /// Number of fixes applied.
    pub fixes_applied: usize,
    /// Indices into the input diagnostics of the fixes that were applied,
    /// in source order.
    pub applied: Vec<usize>,
    /// The fixed content.
    pub fixed_content: String,
}

impl FixerResult {
    fn unchanged(content: &str) -> Self {
        Self {
            fixes_applied: 0,
            applied: Vec::new(),
            fixed_content: content.to_string(),
        }
    }
}

/// Applies the fixes attached to `diagnostics` to `content`.
///
/// Fixes are applied from the end of the text to the beginning so earlier
/// offsets stay valid. When two fixes overlap, the one starting later wins.
pub fn apply_fixes_to_content(content: &str, diagnostics: &[Diagnostic]) -> FixerResult {
    let mut fixes: Vec<(usize, &Fix)> = diagnostics
        .iter()
        .enumerate()
        .filter_map(|(index, d)| d.fix.as_ref().map(|fix| (index, fix)))
        .collect();
    if fixes.is_empty() {
        return FixerResult::unchanged(content);
    }

    fixes.sort_by(|(_, a), (_, b)| b.span.start.cmp(&a.span.start));
    let fixes = filter_overlapping_fixes(fixes);

    let mut result = content.to_string();
    let mut applied = Vec::new();

    for (index, fix) in fixes {
        let start = fix.span.start as usize;
        let end = fix.span.end as usize;

        if start > end
            || end > result.len()
            || !result.is_char_boundary(start)
            || !result.is_char_boundary(end)
        {
            warn!(
                "Invalid fix span: start={}, end={}, content_len={}",
                start,
                end,
                result.len()
            );
            continue;
        }

        debug!("Applying fix: replace [{}..{}] with '{}'", start, end, fix.text);
        result.replace_range(start..end, &fix.text);
        applied.push(index);
    }

    applied.reverse();
    FixerResult {
        fixes_applied: applied.len(),
        applied,
        fixed_content: result,
    }
}

/// Drops fixes overlapping an already accepted one.
///
/// `fixes` must be sorted by start offset, descending.
pub(crate) fn filter_overlapping_fixes(fixes: Vec<(usize, &Fix)>) -> Vec<(usize, &Fix)> {
    let mut accepted: Vec<(usize, &Fix)> = Vec::with_capacity(fixes.len());

    for (index, fix) in fixes {
        // accepted is sorted descending too, so only the last one can overlap
        let overlaps = accepted.last().is_some_and(|(_, last)| {
            !(fix.span.end <= last.span.start || fix.span.start >= last.span.end)
        });

        if overlaps {
            warn!(
                "Skipping overlapping fix at [{}, {}]",
                fix.span.start, fix.span.end
            );
        } else {
            accepted.push((index, fix));
        }
    }

    accepted
}
