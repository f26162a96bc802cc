use serde::Serialize;

use crate::parsing::span::Span;

use super::kinds::{Bold, CodeSpan, Italic};

/// Inline style of a resolved span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InlineStyle {
    Bold,
    Italic,
    Code,
}

impl InlineStyle {
    /// Resolution order: earlier styles claim text first.
    pub const PRIORITY: [InlineStyle; 3] = [InlineStyle::Bold, InlineStyle::Code, InlineStyle::Italic];

    /// The delimiter written on each side of the span.
    pub fn delimiter(self) -> &'static str {
        match self {
            InlineStyle::Bold => Bold::MARKER,
            InlineStyle::Italic => Italic::MARKER,
            InlineStyle::Code => CodeSpan::TICK,
        }
    }
}

/// A styled range over a block's content text.
///
/// `span` covers the delimiters too, so it maps straight back onto the source for
/// live styling. Use [`InlineSpan::inner`] for the text between the delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    /// Byte span relative to the block's content, delimiters included.
    pub span: Span,
    pub style: InlineStyle,
}

impl InlineSpan {
    pub fn new(start: usize, end: usize, style: InlineStyle) -> Self {
        Self {
            span: Span::new(start, end),
            style,
        }
    }

    /// The content between the delimiters. Never empty for a resolved span.
    pub fn inner(&self) -> Span {
        let d = self.style.delimiter().len();
        Span::new(self.span.start + d, self.span.end - d)
    }

    pub fn open_marker(&self) -> Span {
        Span::new(self.span.start, self.inner().start)
    }

    pub fn close_marker(&self) -> Span {
        Span::new(self.inner().end, self.span.end)
    }
}
