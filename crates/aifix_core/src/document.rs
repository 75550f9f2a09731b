//! Source document model shared by all rules.
//!
//! A [`Document`] owns nothing: it borrows the source text and precomputes
//! line starts plus the byte ranges rules must not look into (code and raw
//! HTML in Markdown).

use markdown::{ParseOptions, mdast::Node, to_mdast};

use crate::LinterError;
use crate::span::{Location, Position, Span};

/// Source syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Markdown (GFM).
    Markdown,
    /// Anything else is linted line by line as plain text.
    PlainText,
}

impl Syntax {
    const MARKDOWN_EXTENSIONS: &'static [&'static str] =
        &["md", "markdown", "mdown", "mkdn", "mkd"];

    /// Picks the syntax for a file extension (without the leading dot).
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some(ext)
                if Self::MARKDOWN_EXTENSIONS
                    .iter()
                    .any(|m| m.eq_ignore_ascii_case(ext)) =>
            {
                Syntax::Markdown
            }
            _ => Syntax::PlainText,
        }
    }
}

/// A single source line.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    /// Line number (1-indexed).
    pub number: u32,
    /// Byte offset of the first character of the line.
    pub start: u32,
    /// Line text without the trailing `\n`.
    pub text: &'a str,
}

/// Parsed view over a source text.
#[derive(Debug)]
pub struct Document<'a> {
    source: &'a str,
    line_starts: Vec<u32>,
    ignored: Vec<Span>,
}

impl<'a> Document<'a> {
    /// Builds a document, parsing Markdown when `syntax` asks for it.
    pub fn parse(source: &'a str, syntax: Syntax) -> Result<Self, LinterError> {
        let ignored = match syntax {
            Syntax::Markdown => {
                let root = to_mdast(source, &ParseOptions::gfm())
                    .map_err(|e| LinterError::parse(e.to_string()))?;
                let mut spans = Vec::new();
                collect_ignored(&root, &mut spans);
                spans.sort();
                spans
            }
            Syntax::PlainText => Vec::new(),
        };

        Ok(Self {
            source,
            line_starts: line_starts(source),
            ignored,
        })
    }

    /// Returns the source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Iterates over the lines of the source. Lines are split on `\n` only.
    pub fn lines(&self) -> impl Iterator<Item = Line<'a>> + '_ {
        self.source
            .split('\n')
            .zip(&self.line_starts)
            .enumerate()
            .map(|(index, (text, start))| Line {
                number: index as u32 + 1,
                start: *start,
                text,
            })
    }

    /// Returns true if any byte of `span` lies inside code or raw HTML.
    pub fn is_ignored(&self, span: Span) -> bool {
        self.ignored.iter().any(|ignored| {
            ignored.overlaps(&span) || (span.is_empty() && ignored.contains(span.start))
        })
    }

    /// Converts a byte offset into a 1-indexed line/column position.
    ///
    /// Offsets past the end clamp to the end of the source.
    pub fn position(&self, offset: u32) -> Position {
        let offset = offset.min(self.source.len() as u32);
        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index - 1,
        };
        let line_start = self.line_starts[line_index] as usize;
        let column = self.source[line_start..offset as usize].chars().count() as u32 + 1;
        Position::new(line_index as u32 + 1, column)
    }

    /// Converts a byte span into a line/column location.
    pub fn location(&self, span: Span) -> Location {
        Location::new(self.position(span.start), self.position(span.end))
    }
}

fn line_starts(source: &str) -> Vec<u32> {
    std::iter::once(0)
        .chain(source.match_indices('\n').map(|(i, _)| i as u32 + 1))
        .collect()
}

fn collect_ignored(node: &Node, spans: &mut Vec<Span>) {
    match node {
        Node::Code(_)
        | Node::InlineCode(_)
        | Node::Html(_)
        | Node::Math(_)
        | Node::InlineMath(_) => {
            if let Some(pos) = node.position() {
                spans.push(Span::new(pos.start.offset as u32, pos.end.offset as u32));
            }
        }
        _ => {
            if let Some(children) = node.children() {
                for child in children {
                    collect_ignored(child, spans);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn syntax_from_extension() {
        assert_eq!(Syntax::from_extension(Some("md")), Syntax::Markdown);
        assert_eq!(Syntax::from_extension(Some("MD")), Syntax::Markdown);
        assert_eq!(Syntax::from_extension(Some("txt")), Syntax::PlainText);
        assert_eq!(Syntax::from_extension(None), Syntax::PlainText);
    }

    #[test]
    fn positions_are_one_indexed_characters() {
        let doc = Document::parse("abc\n日本語です\n", Syntax::PlainText).unwrap();

        assert_eq!(doc.position(0), Position::new(1, 1));
        assert_eq!(doc.position(3), Position::new(1, 4));
        assert_eq!(doc.position(4), Position::new(2, 1));
        // "日本" is 6 bytes, 2 characters
        assert_eq!(doc.position(10), Position::new(2, 3));
        assert_eq!(doc.position(1000), Position::new(3, 1));
    }

    #[test]
    fn lines_keep_carriage_returns() {
        let doc = Document::parse("first\r\nsecond", Syntax::PlainText).unwrap();
        let lines: Vec<_> = doc.lines().map(|l| (l.number, l.start, l.text)).collect();

        assert_eq!(lines, vec![(1, 0, "first\r"), (2, 7, "second")]);
    }

    #[test]
    fn location_spans_lines() {
        let doc = Document::parse("ab\ncd", Syntax::PlainText).unwrap();
        let loc = doc.location(Span::new(1, 4));

        assert_eq!(loc.start, Position::new(1, 2));
        assert_eq!(loc.end, Position::new(2, 2));
    }

    #[test]
    fn markdown_code_is_ignored() {
        let source = "革命的\n\n```\n革命的\n```\n\n`革命的` です\n";
        let doc = Document::parse(source, Syntax::Markdown).unwrap();

        let first = source.find("革命的").unwrap() as u32;
        let fenced = source[first as usize + 9..].find("革命的").unwrap() as u32 + first + 9;
        let inline = source.rfind("革命的").unwrap() as u32;

        assert!(!doc.is_ignored(Span::new(first, first + 9)));
        assert!(doc.is_ignored(Span::new(fenced, fenced + 9)));
        assert!(doc.is_ignored(Span::new(inline, inline + 9)));
    }

    #[test]
    fn plain_text_ignores_nothing() {
        let source = "`革命的`";
        let doc = Document::parse(source, Syntax::PlainText).unwrap();
        assert!(!doc.is_ignored(Span::new(1, 10)));
    }
}
