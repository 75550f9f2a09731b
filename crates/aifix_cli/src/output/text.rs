//! Text output formatter

use std::path::Path;

use aifix_core::Diagnostic;

/// Renders the human-readable report.
///
/// `using_default` adds the banner and hints shown when no local
/// configuration was found.
pub fn render_text(path: &Path, diagnostics: &[Diagnostic], using_default: bool) -> String {
    let mut out = String::new();
    let path = path.display();

    if using_default {
        out.push_str("ℹ️  Using default AI-writing detection rules (no .textlintrc found)\n\n");
    }

    if diagnostics.is_empty() {
        out.push_str(&format!("✅ No AI-like issues found in: {}\n", path));
        if using_default {
            out.push_str(
                "   (Using default detection rules - create .textlintrc for more options)\n",
            );
        }
        return out;
    }

    out.push_str(&format!(
        "Found {} issue(s) in {}:\n\n",
        diagnostics.len(),
        path
    ));
    for (i, diag) in diagnostics.iter().enumerate() {
        let line = diag.loc.map_or(1, |loc| loc.start.line);
        out.push_str(&format!("{}. Line {}: {}\n", i + 1, line, diag.message));
        out.push_str(&format!("   Rule: {}\n\n", diag.rule_id));
    }
    out.push_str("Note: These rules detect AI-like patterns but do not provide automatic fixes.\n");
    out.push_str("Use --json flag for structured JSON output compatible with AI tools.\n");
    if using_default {
        out.push_str("\nTip: Create a .textlintrc file to customize rules or add more checks.\n");
    }

    out
}
