//! no-ai-list-formatting: mechanical list decoration.
//!
//! Flags list items that open with an emoji (`- 🚀 高速化`) or with a bold
//! label followed by a colon (`- **速度**: 高速`).
//!
//! # Configuration
//!
//! | Option | Type | Default | Description |
//! |--------|------|---------|-------------|
//! | allows | string[] | [] | Matches containing these strings are not reported |
//! | disableEmojiListItems | boolean | false | Do not check emoji-led items |
//! | disableBoldListItems | boolean | false | Do not check bold-label items |

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::{Rule, RuleContext};
use crate::document::Document;
use crate::span::Span;

/// Marker and spacing of a Markdown list item.
pub(crate) const LIST_MARKER: &str = r"^[ \t]*(?:[-*+]|\d{1,9}[.)])[ \t]+";

static EMOJI_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m){LIST_MARKER}(\p{{Extended_Pictographic}}(?:\x{{FE0F}}|\x{{200D}}\p{{Extended_Pictographic}})*)"
    ))
    .expect("valid emoji list pattern")
});

static BOLD_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m){LIST_MARKER}(\*\*[^*\n]+\*\*[ \t]*[:：]|__[^_\n]+__[ \t]*[:：])"
    ))
    .expect("valid bold list pattern")
});

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListFormattingOptions {
    pub disable_emoji_list_items: bool,
    pub disable_bold_list_items: bool,
}

pub struct ListFormatting {
    options: ListFormattingOptions,
}

impl ListFormatting {
    pub const NAME: &'static str = "no-ai-list-formatting";

    pub fn new(options: ListFormattingOptions) -> Self {
        Self { options }
    }
}

impl Rule for ListFormatting {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, document: &Document<'_>, ctx: &mut RuleContext<'_>) {
        let source = document.source();

        if !self.options.disable_emoji_list_items {
            for caps in EMOJI_ITEM.captures_iter(source) {
                let Some(emoji) = caps.get(1) else { continue };
                ctx.report(
                    Span::new(emoji.start() as u32, emoji.end() as u32),
                    format!(
                        "リスト項目の先頭に絵文字「{}」が使われています。機械的な印象を与えるため、絵文字に頼らない表現を検討してください。",
                        emoji.as_str()
                    ),
                );
            }
        }

        if !self.options.disable_bold_list_items {
            for caps in BOLD_ITEM.captures_iter(source) {
                let Some(label) = caps.get(1) else { continue };
                ctx.report(
                    Span::new(label.start() as u32, label.end() as u32),
                    format!(
                        "リスト項目が「{}」のような太字の見出しで始まっています。定型的な箇条書きは避け、文章で説明することを検討してください。",
                        label.as_str()
                    ),
                );
            }
        }
    }
}
