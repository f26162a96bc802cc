use serde::Serialize;

use crate::parsing::span::Span;

/// Whether a fence line opens or closes a fenced region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FenceRole {
    /// Opening fence with its optional info string (e.g. `rust`).
    Open { info: Option<String> },
    Close,
}

/// The kind of a single classified line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    /// A ```` ``` ```` line. The marker is never part of any block's content.
    CodeFence { role: FenceRole },
    /// A line inside an open fence, kept verbatim.
    CodeBlockBody,
    /// Empty or whitespace-only line.
    Blank,
    /// `# `, `## ` or `### `.
    Heading { level: u8 },
    /// `> `.
    BlockQuote,
    /// `- ` or `* `.
    UnorderedListItem { bullet: char },
    /// `\d+. `, with the marker (e.g. `"3."`) kept as typed.
    OrderedListItem { marker: String },
    /// Exactly `---`.
    HorizontalRule,
    /// Anything else that isn't blank.
    Paragraph,
}

impl BlockKind {
    /// Kinds whose content goes through inline span resolution.
    pub fn supports_inline(&self) -> bool {
        matches!(
            self,
            BlockKind::Heading { .. }
                | BlockKind::Paragraph
                | BlockKind::BlockQuote
                | BlockKind::UnorderedListItem { .. }
                | BlockKind::OrderedListItem { .. }
        )
    }

    pub fn is_fence(&self) -> bool {
        matches!(self, BlockKind::CodeFence { .. })
    }
}

/// One source line after classification, before inline resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawBlock {
    pub kind: BlockKind,
    /// Byte span of the whole line in the source, excluding its terminator.
    pub line: Span,
    /// Byte span of the content in the source: the line minus leading whitespace
    /// and the block prefix. Empty for fences and rules.
    pub content: Span,
    /// The line text exactly as it appears in the source.
    pub text: String,
}

impl RawBlock {
    /// The content slice of [`RawBlock::text`].
    pub fn content_text(&self) -> &str {
        let start = self.content.start - self.line.start;
        let end = self.content.end - self.line.start;
        &self.text[start..end]
    }
}
