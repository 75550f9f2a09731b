//! no-ai-colon-continuation: polite sentence endings followed by a colon.
//!
//! `以下のとおりです：` reads as machine-generated; the fix ends the
//! sentence with `。` instead.

use std::sync::LazyLock;

use regex::Regex;

use super::{Rule, RuleContext};
use crate::document::Document;
use crate::span::Span;

static COLON_ENDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(です|ます|でした|ました|ください)[:：][ \t\x{3000}]*\r?$")
        .expect("valid colon continuation pattern")
});

pub struct ColonContinuation;

impl ColonContinuation {
    pub const NAME: &'static str = "no-ai-colon-continuation";

    pub fn new() -> Self {
        Self
    }
}

impl Default for ColonContinuation {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ColonContinuation {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn check(&self, document: &Document<'_>, ctx: &mut RuleContext<'_>) {
        for caps in COLON_ENDING.captures_iter(document.source()) {
            let Some(ending) = caps.get(1) else { continue };
            // ending plus the colon, which is always one character
            let colon_len = document.source()[ending.end()..]
                .chars()
                .next()
                .map_or(0, char::len_utf8);
            let end = ending.end() + colon_len;

            ctx.report_with_fix(
                Span::new(ending.start() as u32, end as u32),
                format!(
                    "「{}」のようにコロンで文をつなげる書き方は機械的な印象を与えます。「。」で文を終えることを検討してください。",
                    &document.source()[ending.start()..end]
                ),
                format!("{}。", ending.as_str()),
            );
        }
    }
}
