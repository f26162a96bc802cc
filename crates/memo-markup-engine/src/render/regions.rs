use crate::parsing::{Block, BlockKind, Document, FenceRole};

/// A contiguous fenced region: the body lines between an opening fence and its
/// closing fence (or end of input).
#[derive(Debug, Clone, PartialEq)]
pub struct CodeRegion<'a> {
    /// Info string of the opening fence.
    pub info: Option<&'a str>,
    pub lines: Vec<&'a Block>,
}

impl CodeRegion<'_> {
    /// Body lines joined with `\n`, verbatim.
    pub fn code(&self) -> String {
        self.lines
            .iter()
            .map(|b| b.content_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A document viewed as renderers need it: single lines, or whole code regions.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    Line(&'a Block),
    Code(CodeRegion<'a>),
}

/// Groups fence and body blocks into [`CodeRegion`]s; every other block passes
/// through as a [`Segment::Line`], in order.
pub fn segments(doc: &Document) -> Vec<Segment<'_>> {
    let mut out = vec![];
    let mut open: Option<CodeRegion<'_>> = None;

    for block in &doc.blocks {
        match &block.kind {
            BlockKind::CodeFence {
                role: FenceRole::Open { info },
            } => {
                if let Some(region) = open.take() {
                    out.push(Segment::Code(region));
                }
                open = Some(CodeRegion {
                    info: info.as_deref(),
                    lines: vec![],
                });
            }
            BlockKind::CodeFence {
                role: FenceRole::Close,
            } => {
                if let Some(region) = open.take() {
                    out.push(Segment::Code(region));
                }
            }
            BlockKind::CodeBlockBody => {
                open.get_or_insert_with(|| CodeRegion {
                    info: None,
                    lines: vec![],
                })
                .lines
                .push(block);
            }
            _ => {
                if let Some(region) = open.take() {
                    out.push(Segment::Code(region));
                }
                out.push(Segment::Line(block));
            }
        }
    }

    if let Some(region) = open {
        out.push(Segment::Code(region));
    }
    out
}
