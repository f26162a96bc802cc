use crate::parsing::lines::{LineRef, lines_with_spans};

use super::{
    classify::{LineClass, LineClassifier},
    types::{BlockKind, FenceRole, RawBlock},
};

/// Line-by-line state machine that turns classified lines into [`RawBlock`]s.
///
/// The only state carried across lines is whether a fence is open. A fence left
/// open at end of input is closed implicitly: its body lines are already emitted,
/// so nothing is dropped.
pub struct Tokenizer {
    classifier: LineClassifier,
    /// Byte offset of the opening fence line while inside a fence.
    open_fence: Option<usize>,
    out: Vec<RawBlock>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier,
            open_fence: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, lr: &LineRef<'_>) {
        let LineClass { kind, content } = self.classifier.classify(lr, self.in_fence());

        if let BlockKind::CodeFence { role } = &kind {
            self.open_fence = match role {
                FenceRole::Open { .. } => Some(lr.span.start),
                FenceRole::Close => None,
            };
        }

        self.out.push(RawBlock {
            kind,
            line: lr.span,
            content,
            text: lr.text.to_string(),
        });
    }

    pub fn finish(self) -> Vec<RawBlock> {
        if let Some(start) = self.open_fence {
            log::debug!("code fence opened at byte {start} runs to end of input");
        }
        self.out
    }

    pub fn in_fence(&self) -> bool {
        self.open_fence.is_some()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `text` into one [`RawBlock`] per line, in source order.
///
/// Total over any input: the empty string yields no blocks, and every other line
/// finds a kind (paragraph is the fallback).
pub fn tokenize(text: &str) -> Vec<RawBlock> {
    let mut tokenizer = Tokenizer::new();
    for lr in lines_with_spans(text) {
        tokenizer.push(&lr);
    }
    tokenizer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::span::Span;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<BlockKind> {
        tokenize(text).into_iter().map(|b| b.kind).collect()
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn one_block_per_line() {
        let blocks = tokenize("# Title\n\nHello **world**.");
        assert_eq!(
            blocks.iter().map(|b| b.kind.clone()).collect::<Vec<_>>(),
            vec![
                BlockKind::Heading { level: 1 },
                BlockKind::Blank,
                BlockKind::Paragraph
            ]
        );
        assert_eq!(blocks[0].content_text(), "Title");
        assert_eq!(blocks[2].content_text(), "Hello **world**.");
        assert_eq!(blocks[2].line, Span::new(9, 25));
    }

    #[test]
    fn fence_toggles_body_classification() {
        assert_eq!(
            kinds("```\n# inside\n```\n# outside"),
            vec![
                BlockKind::CodeFence {
                    role: FenceRole::Open { info: None }
                },
                BlockKind::CodeBlockBody,
                BlockKind::CodeFence {
                    role: FenceRole::Close
                },
                BlockKind::Heading { level: 1 },
            ]
        );
    }

    #[test]
    fn unterminated_fence_keeps_trailing_lines() {
        let blocks = tokenize("```\nfoo\nbar");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].kind, BlockKind::CodeBlockBody);
        assert_eq!(blocks[1].content_text(), "foo");
        assert_eq!(blocks[2].content_text(), "bar");
    }

    #[test]
    fn body_lines_are_verbatim() {
        let blocks = tokenize("```\n  **not bold**  \n```");
        assert_eq!(blocks[1].content_text(), "  **not bold**  ");
    }

    #[test]
    fn second_fence_after_close_opens_again() {
        assert_eq!(
            kinds("```\na\n```\n```\nb"),
            vec![
                BlockKind::CodeFence {
                    role: FenceRole::Open { info: None }
                },
                BlockKind::CodeBlockBody,
                BlockKind::CodeFence {
                    role: FenceRole::Close
                },
                BlockKind::CodeFence {
                    role: FenceRole::Open { info: None }
                },
                BlockKind::CodeBlockBody,
            ]
        );
    }
}
