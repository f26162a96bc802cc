use serde::Serialize;

use super::{
    blocks::{BlockKind, RawBlock},
    inline::{InlineSpan, resolve_spans},
    span::Span,
};

/// One classified line with its resolved inline spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Byte span of the whole line in the source, excluding its terminator.
    pub line: Span,
    /// Byte span of the content in the source (line minus indent and prefix).
    pub content: Span,
    /// The line text exactly as it appears in the source.
    pub text: String,
    /// Inline spans relative to the content. Always empty for verbatim blocks.
    pub spans: Vec<InlineSpan>,
}

impl Block {
    /// The content slice of [`Block::text`].
    pub fn content_text(&self) -> &str {
        let start = self.content.start - self.line.start;
        let end = self.content.end - self.line.start;
        &self.text[start..end]
    }

    /// True for fences and fenced body lines, whose text is never inline-parsed.
    pub fn is_verbatim(&self) -> bool {
        !self.kind.supports_inline()
    }

    /// Absolute byte span of the block prefix (`# `, `> `, `- `, `1. `), after
    /// any indent. For fences and rules this is the marker itself; paragraphs,
    /// blanks and fenced body lines have an empty prefix.
    pub fn prefix(&self) -> Span {
        let indent = self.text.len() - self.text.trim_start().len();
        let start = (self.line.start + indent).min(self.content.start);
        Span::new(start, self.content.start)
    }
}

/// The parsed form of one source text: blocks in line order.
///
/// Immutable once built and rebuilt from scratch on every change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Attaches inline spans to every inline-capable block.
///
/// Total: verbatim kinds get an empty span list, everything else is resolved.
pub fn build_document(raw: Vec<RawBlock>) -> Document {
    let blocks = raw
        .into_iter()
        .map(|rb| {
            let spans = if rb.kind.supports_inline() {
                resolve_spans(rb.content_text())
            } else {
                vec![]
            };
            Block {
                kind: rb.kind,
                line: rb.line,
                content: rb.content,
                text: rb.text,
                spans,
            }
        })
        .collect();

    Document { blocks }
}
