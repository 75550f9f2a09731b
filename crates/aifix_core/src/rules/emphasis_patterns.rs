//! no-ai-emphasis-patterns: formulaic emphasis.
//!
//! Flags emoji stuck to bold text (`✅ **完了**`) and paragraphs that open
//! with a bold label and a colon (`**重要**：`). List items are left to
//! `no-ai-list-formatting`.

use std::sync::LazyLock;

use regex::Regex;

use super::list_formatting::LIST_MARKER;
use super::{Rule, RuleContext};
use crate::document::Document;
use crate::span::Span;

static EMOJI_BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Extended_Pictographic}\x{FE0F}?[ \t]*\*\*[^*\n]+\*\*")
        .expect("valid emoji emphasis pattern")
});

static BOLD_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:>[ \t]*)?(\*\*[^*\n]+\*\*[ \t]*[:：])")
        .expect("valid bold label pattern")
});

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LIST_MARKER).expect("valid list marker pattern"));

pub struct EmphasisPatterns;

impl EmphasisPatterns {
    pub const NAME: &'static str = "no-ai-emphasis-patterns";

    pub fn new() -> Self {
        Self
    }
}

impl Default for EmphasisPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for EmphasisPatterns {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, document: &Document<'_>, ctx: &mut RuleContext<'_>) {
        let source = document.source();

        for m in EMOJI_BOLD.find_iter(source) {
            ctx.report(
                Span::new(m.start() as u32, m.end() as u32),
                format!(
                    "「{}」のように絵文字と太字を組み合わせた強調は機械的な印象を与えます。強調は必要な箇所だけに絞ることを検討してください。",
                    m.as_str()
                ),
            );
        }

        for line in document.lines() {
            if LIST_ITEM.is_match(line.text) {
                continue;
            }
            let Some(label) = BOLD_LABEL.captures(line.text).and_then(|c| c.get(1)) else {
                continue;
            };
            ctx.report(
                Span::new(line.start + label.start() as u32, line.start + label.end() as u32),
                format!(
                    "「{}」のように太字の見出しとコロンで始める書き方は定型的です。文の中で自然に伝えることを検討してください。",
                    label.as_str()
                ),
            );
        }
    }
}
