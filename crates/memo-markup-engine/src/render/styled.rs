use std::ops::Range;

use serde::Serialize;

use crate::parsing::{Block, BlockKind, Document, InlineStyle, Span};

use super::offsets::{OffsetConverter, OffsetUnit};

/// Formatting a host paints over a range of its live buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextAttributes {
    pub heading: Option<u8>,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub quote: bool,
    pub list_item: bool,
    pub code_block: bool,
    pub rule: bool,
    /// Delimiter characters (block prefixes, fences, emphasis markers). Hosts
    /// usually dim these but must keep them editable.
    pub syntax: bool,
}

impl TextAttributes {
    fn with_style(mut self, style: InlineStyle) -> Self {
        match style {
            InlineStyle::Bold => self.bold = true,
            InlineStyle::Italic => self.italic = true,
            InlineStyle::Code => self.code = true,
        }
        self
    }

    fn syntax(mut self) -> Self {
        self.syntax = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// Attributes for one range of the parsed source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRun {
    /// Absolute range in the source, in the requested [`OffsetUnit`].
    pub range: Range<usize>,
    pub attributes: TextAttributes,
}

/// Renders `doc` into attribute ranges over the text it was parsed from.
///
/// Ranges are absolute, ascending and never overlap. Plain text gets no run, so
/// hosts reset attributes for the whole buffer before applying these.
pub fn render_styled_runs(doc: &Document, unit: OffsetUnit) -> Vec<StyledRun> {
    let mut out = vec![];
    let mut prev_end_byte = 0;
    let mut prev_end_units = 0;

    for block in &doc.blocks {
        // Line terminators are ASCII: one unit per byte in every unit.
        let line_units = prev_end_units + (block.line.start - prev_end_byte);
        let mut conv = OffsetConverter::new(&block.text, unit);

        for (span, attributes) in block_runs(block) {
            let start = line_units + conv.convert(span.start - block.line.start);
            let end = line_units + conv.convert(span.end - block.line.start);
            out.push(StyledRun {
                range: start..end,
                attributes,
            });
        }

        prev_end_byte = block.line.end;
        prev_end_units = line_units + conv.convert(block.text.len());
    }

    out
}

/// Byte-span partition of one line into styled pieces, ascending.
fn block_runs(block: &Block) -> Vec<(Span, TextAttributes)> {
    let mut runs = vec![];
    let mut push = |span: Span, attrs: TextAttributes| {
        if !span.is_empty() && !attrs.is_plain() {
            runs.push((span, attrs));
        }
    };

    let base = TextAttributes::default();
    let base = match &block.kind {
        BlockKind::Blank => return runs,
        BlockKind::CodeFence { .. } => {
            push(block.prefix(), TextAttributes { code_block: true, ..base }.syntax());
            return runs;
        }
        BlockKind::HorizontalRule => {
            push(block.prefix(), TextAttributes { rule: true, ..base }.syntax());
            return runs;
        }
        BlockKind::CodeBlockBody => {
            push(block.content, TextAttributes { code_block: true, ..base });
            return runs;
        }
        BlockKind::Heading { level } => TextAttributes {
            heading: Some(*level),
            ..base
        },
        BlockKind::BlockQuote => TextAttributes { quote: true, ..base },
        BlockKind::UnorderedListItem { .. } | BlockKind::OrderedListItem { .. } => {
            TextAttributes {
                list_item: true,
                ..base
            }
        }
        BlockKind::Paragraph => base,
    };

    push(block.prefix(), base.syntax());

    let offset = block.content.start;
    let mut at = offset;
    for span in &block.spans {
        let styled = base.with_style(span.style);
        push(Span::new(at, offset + span.span.start), base);
        push(span.open_marker().shift(offset), styled.syntax());
        push(span.inner().shift(offset), styled);
        push(span.close_marker().shift(offset), styled.syntax());
        at = offset + span.span.end;
    }
    push(Span::new(at, block.content.end), base);

    runs
}
