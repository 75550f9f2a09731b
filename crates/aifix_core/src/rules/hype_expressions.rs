//! no-ai-hype-expressions: hyperbolic and buzzword-heavy phrasing.
//!
//! Three groups of expressions are checked:
//!
//! - hyperbole (`革命的`, `世界初`, ...)
//! - absolute claims (`絶対に`, `100%`, ...)
//! - abstract buzzwords (`シームレス`, `ゲームチェンジャー`, ...)
//!
//! # Configuration
//!
//! | Option | Type | Default | Description |
//! |--------|------|---------|-------------|
//! | allows | string[] | [] | Matches containing these strings are not reported |
//! | disableAbsolutenessPatterns | boolean | false | Skip absolute claims |
//! | disableAbstractPatterns | boolean | false | Skip abstract buzzwords |

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::{Rule, RuleContext};
use crate::document::Document;
use crate::span::Span;

const HYPERBOLIC: &[&str] = &[
    "革命的",
    "画期的",
    "究極の",
    "驚異的",
    "圧倒的",
    "世界初",
    "史上最高",
    "史上初",
    "前代未聞",
    "唯一無二",
    "比類なき",
    "完璧な",
    "最強の",
    "異次元の",
    "夢のような",
    "魔法のような",
];

const ABSOLUTENESS: &[&str] = &[
    "絶対に",
    "間違いなく",
    "100%",
    "100％",
    "誰でも簡単に",
    "すべてを解決",
];

const ABSTRACT: &[&str] = &[
    "シームレス",
    "ゲームチェンジャー",
    "パラダイムシフト",
    "次世代の",
    "新時代の",
    "未来を切り拓く",
    "可能性を解き放つ",
];

/// One group of expressions sharing a message.
struct Pattern {
    regex: Regex,
    message: fn(&str) -> String,
}

impl Pattern {
    fn new(words: &[&str], message: fn(&str) -> String) -> Self {
        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        Self {
            regex: Regex::new(&alternation).expect("valid hype pattern"),
            message,
        }
    }
}

static HYPERBOLIC_PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(HYPERBOLIC, |word| {
        format!(
            "「{}」は誇張された表現です。具体的な事実や数値で説明することを検討してください。",
            word
        )
    })
});

static ABSOLUTENESS_PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(ABSOLUTENESS, |word| {
        format!(
            "「{}」は断定的すぎる表現です。根拠や条件を添えることを検討してください。",
            word
        )
    })
});

static ABSTRACT_PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(ABSTRACT, |word| {
        format!(
            "「{}」は抽象的な宣伝文句です。何がどう良くなるのかを具体的に書くことを検討してください。",
            word
        )
    })
});

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HypeExpressionsOptions {
    pub disable_absoluteness_patterns: bool,
    pub disable_abstract_patterns: bool,
}

pub struct HypeExpressions {
    options: HypeExpressionsOptions,
}

impl HypeExpressions {
    pub const NAME: &'static str = "no-ai-hype-expressions";

    pub fn new(options: HypeExpressionsOptions) -> Self {
        Self { options }
    }

    fn patterns(&self) -> Vec<&'static Pattern> {
        let mut patterns = vec![&*HYPERBOLIC_PATTERN];
        if !self.options.disable_absoluteness_patterns {
            patterns.push(&*ABSOLUTENESS_PATTERN);
        }
        if !self.options.disable_abstract_patterns {
            patterns.push(&*ABSTRACT_PATTERN);
        }
        patterns
    }
}

impl Rule for HypeExpressions {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, document: &Document<'_>, ctx: &mut RuleContext<'_>) {
        for pattern in self.patterns() {
            for m in pattern.regex.find_iter(document.source()) {
                ctx.report(
                    Span::new(m.start() as u32, m.end() as u32),
                    (pattern.message)(m.as_str()),
                );
            }
        }
    }
}
