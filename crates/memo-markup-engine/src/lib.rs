//! # memo-markup-engine
//!
//! Parses the note dialect (headings, emphasis, inline code, quotes, lists, code
//! fences, rules) into an immutable [`Document`] and renders that one document into
//! three targets:
//!
//! - [`render_blocks`]: abstract display blocks for a native preview
//! - [`render_markup`]: an escaped HTML string for an embedded web view
//! - [`render_styled_runs`]: attribute ranges over the host's live buffer for
//!   cursor-preserving styling
//!
//! Every call is a pure function of its input text. Nothing is cached between calls.
//!
//! ```rust
//! use memo_markup_engine::{parse, render_markup, MarkupOptions};
//!
//! let doc = parse("# Title\n\nHello **world**.");
//! let html = render_markup(&doc, &MarkupOptions::default());
//! assert!(html.starts_with("<h1>Title</h1>"));
//! ```

pub mod parsing;
pub mod render;
pub mod snippets;

pub use parsing::{
    Block, BlockKind, Document, FenceRole, InlineSpan, InlineStyle, RawBlock, Span,
    build_document, parse, resolve_spans, tokenize,
};
pub use render::{
    DisplayBlock, DisplayOptions, DisplaySpan, ListMarker, MarkupOptions, OffsetUnit,
    RenderOptions, StyledRun, StyledText, TextAttributes, TextRun, render_blocks,
    render_markup, render_styled_runs,
};
pub use snippets::{Snippet, SnippetEdit};
