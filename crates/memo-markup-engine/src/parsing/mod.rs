//! # Parsing
//!
//! Text goes through three stages, leaves first:
//!
//! 1. **Tokenizer** (`blocks`): splits lines, runs the fence state machine and
//!    classifies every line into a [`RawBlock`]
//! 2. **Inline resolver** (`inline`): finds bold, code and italic spans in the
//!    content of inline-capable blocks
//! 3. **Document builder** (`document`): joins the two into an immutable [`Document`]
//!
//! All offsets are byte offsets. Renderers convert to other units at the boundary.

pub mod blocks;
pub mod document;
pub mod inline;
pub mod lines;
pub mod span;

#[cfg(test)]
mod tests;

pub use blocks::{BlockKind, FenceRole, RawBlock, tokenize};
pub use document::{Block, Document, build_document};
pub use inline::{InlineSpan, InlineStyle, resolve_spans};
pub use span::Span;

/// Tokenizes `text` and builds its [`Document`] in one call.
pub fn parse(text: &str) -> Document {
    let doc = build_document(tokenize(text));
    log::trace!("parsed {} bytes into {} blocks", text.len(), doc.blocks.len());
    doc
}
