use crate::parsing::{lines::LineRef, span::Span};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, HorizontalRule, ListItem},
    types::{BlockKind, FenceRole},
};

/// Classification of a single line: its kind and where its content lies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    pub kind: BlockKind,
    /// Absolute content span (see [`super::RawBlock::content`]).
    pub content: Span,
}

/// Classifies individual lines. The only context it needs is whether the
/// tokenizer is currently inside a fence.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies `lr` by the rules in priority order: fence, fenced body, blank,
    /// heading, quote, bullet, numbered, rule, paragraph.
    pub fn classify(&self, lr: &LineRef<'_>, in_fence: bool) -> LineClass {
        let trimmed = lr.text.trim();
        let at_end = Span::new(lr.span.end, lr.span.end);

        if CodeFence::is_fence(trimmed) {
            let role = if in_fence {
                FenceRole::Close
            } else {
                FenceRole::Open {
                    info: CodeFence::info(trimmed),
                }
            };
            return LineClass {
                kind: BlockKind::CodeFence { role },
                content: at_end,
            };
        }

        if in_fence {
            return LineClass {
                kind: BlockKind::CodeBlockBody,
                content: lr.span,
            };
        }

        if trimmed.is_empty() {
            return LineClass {
                kind: BlockKind::Blank,
                content: lr.span,
            };
        }

        let body = lr.text.trim_start();
        let indent = lr.text.len() - body.len();
        let after = |prefix_len: usize| Span::new(lr.span.start + indent + prefix_len, lr.span.end);

        if let Some((level, len)) = Heading::detect(body) {
            return LineClass {
                kind: BlockKind::Heading { level },
                content: after(len),
            };
        }
        if let Some(len) = BlockQuote::prefix_len(body) {
            return LineClass {
                kind: BlockKind::BlockQuote,
                content: after(len),
            };
        }
        if let Some((bullet, len)) = ListItem::bullet(body) {
            return LineClass {
                kind: BlockKind::UnorderedListItem { bullet },
                content: after(len),
            };
        }
        if let Some((marker, len)) = ListItem::numbered(body) {
            return LineClass {
                kind: BlockKind::OrderedListItem { marker },
                content: after(len),
            };
        }
        if HorizontalRule::matches(trimmed) {
            return LineClass {
                kind: BlockKind::HorizontalRule,
                content: at_end,
            };
        }

        LineClass {
            kind: BlockKind::Paragraph,
            content: after(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(text: &str, in_fence: bool) -> LineClass {
        let lr = LineRef {
            span: Span::new(0, text.len()),
            text,
        };
        LineClassifier.classify(&lr, in_fence)
    }

    #[rstest]
    #[case("# a", BlockKind::Heading { level: 1 })]
    #[case("  ## a", BlockKind::Heading { level: 2 })]
    #[case("### a", BlockKind::Heading { level: 3 })]
    #[case("> a", BlockKind::BlockQuote)]
    #[case("- a", BlockKind::UnorderedListItem { bullet: '-' })]
    #[case("* a", BlockKind::UnorderedListItem { bullet: '*' })]
    #[case("12. a", BlockKind::OrderedListItem { marker: "12.".to_string() })]
    #[case("---", BlockKind::HorizontalRule)]
    #[case("  ---  ", BlockKind::HorizontalRule)]
    #[case("", BlockKind::Blank)]
    #[case(" \t ", BlockKind::Blank)]
    #[case("plain text", BlockKind::Paragraph)]
    #[case("#hashtag", BlockKind::Paragraph)]
    #[case("**bold** start", BlockKind::Paragraph)]
    fn classifies_outside_fence(#[case] line: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(line, false).kind, expected);
    }

    #[test]
    fn fence_lines_open_and_close() {
        assert_eq!(
            classify("```rust", false).kind,
            BlockKind::CodeFence {
                role: FenceRole::Open {
                    info: Some("rust".to_string())
                }
            }
        );
        assert_eq!(
            classify("  ``` trailing", true).kind,
            BlockKind::CodeFence {
                role: FenceRole::Close
            }
        );
    }

    #[test]
    fn everything_inside_fence_is_body() {
        for line in ["# not a heading", "- not a list", "", "---"] {
            let c = classify(line, true);
            assert_eq!(c.kind, BlockKind::CodeBlockBody);
            assert_eq!(c.content, Span::new(0, line.len()));
        }
    }

    #[test]
    fn content_skips_indent_and_prefix() {
        let c = classify("  > quoted", false);
        assert_eq!(c.content, Span::new(4, 10));
        let c = classify("3. third", false);
        assert_eq!(c.content, Span::new(3, 8));
    }
}
