use serde::Serialize;

use crate::parsing::{Block, BlockKind, Document, InlineStyle, Span};

use super::regions::{Segment, segments};

/// Options for the display-block renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayOptions {
    /// Height of the spacer a blank line becomes, in host points.
    pub spacer_height: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { spacer_height: 8.0 }
    }
}

/// A styled range over [`StyledText::text`], in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplaySpan {
    pub range: Span,
    pub style: InlineStyle,
}

/// Block text with inline delimiters removed, plus where each style applies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StyledText {
    pub text: String,
    pub spans: Vec<DisplaySpan>,
}

/// A maximal piece of [`StyledText`] with one style (or none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub style: Option<InlineStyle>,
}

impl StyledText {
    /// Strips the delimiters of `block`'s inline spans from its content and maps
    /// each span onto the stripped text.
    pub fn from_block(block: &Block) -> Self {
        let content = block.content_text();
        let mut text = String::with_capacity(content.len());
        let mut spans = Vec::with_capacity(block.spans.len());
        let mut at = 0;

        for span in &block.spans {
            text.push_str(&content[at..span.span.start]);
            let inner = span.inner();
            let start = text.len();
            text.push_str(&content[inner.range()]);
            spans.push(DisplaySpan {
                range: Span::new(start, text.len()),
                style: span.style,
            });
            at = span.span.end;
        }
        text.push_str(&content[at..]);

        Self { text, spans }
    }

    /// Splits the text into runs covering it completely, in order.
    pub fn runs(&self) -> Vec<TextRun> {
        let mut runs = vec![];
        let mut at = 0;
        let mut push = |range: Span, style: Option<InlineStyle>| {
            if !range.is_empty() {
                runs.push(TextRun {
                    text: self.text[range.range()].to_string(),
                    style,
                });
            }
        };

        for span in &self.spans {
            push(Span::new(at, span.range.start), None);
            push(span.range, Some(span.style));
            at = span.range.end;
        }
        push(Span::new(at, self.text.len()), None);
        runs
    }
}

/// How a list item shows its marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ListMarker {
    Bullet,
    /// The marker exactly as typed, e.g. `"1."`; never renumbered.
    Number(String),
}

/// An abstract UI block. One per source line, except that a whole fenced region
/// becomes a single [`DisplayBlock::CodeBlock`] and fence lines vanish.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DisplayBlock {
    Heading { level: u8, text: StyledText },
    Paragraph { text: StyledText },
    Quote { text: StyledText },
    ListItem { marker: ListMarker, text: StyledText },
    Divider,
    Spacer { height: f32 },
    CodeBlock { info: Option<String>, code: String },
}

/// Renders `doc` into display blocks, in source order.
pub fn render_blocks(doc: &Document, options: &DisplayOptions) -> Vec<DisplayBlock> {
    segments(doc)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Code(region) => Some(DisplayBlock::CodeBlock {
                info: region.info.map(str::to_string),
                code: region.code(),
            }),
            Segment::Line(block) => line_block(block, options),
        })
        .collect()
}

fn line_block(block: &Block, options: &DisplayOptions) -> Option<DisplayBlock> {
    let text = || StyledText::from_block(block);
    let out = match &block.kind {
        BlockKind::Heading { level } => DisplayBlock::Heading {
            level: *level,
            text: text(),
        },
        BlockKind::Paragraph => DisplayBlock::Paragraph { text: text() },
        BlockKind::BlockQuote => DisplayBlock::Quote { text: text() },
        BlockKind::UnorderedListItem { .. } => DisplayBlock::ListItem {
            marker: ListMarker::Bullet,
            text: text(),
        },
        BlockKind::OrderedListItem { marker } => DisplayBlock::ListItem {
            marker: ListMarker::Number(marker.clone()),
            text: text(),
        },
        BlockKind::HorizontalRule => DisplayBlock::Divider,
        BlockKind::Blank => DisplayBlock::Spacer {
            height: options.spacer_height,
        },
        // Grouped into regions by `segments`.
        BlockKind::CodeFence { .. } | BlockKind::CodeBlockBody => return None,
    };
    Some(out)
}
