//! # Rendering
//!
//! Three renderers over the same [`Document`](crate::Document). None of them looks
//! at source text beyond what the document carries, and none re-derives block or
//! inline structure on its own:
//!
//! - **`display`**: `render_blocks` → [`DisplayBlock`] descriptors
//! - **`markup`**: `render_markup` → escaped HTML
//! - **`styled`**: `render_styled_runs` → [`StyledRun`] ranges over the source
//!
//! Shared pieces live beside them: **`regions`** groups fenced lines into code
//! regions, **`offsets`** converts byte offsets into the host's units, and
//! **`summary`** derives a title and plain text for note lists and search.

pub mod display;
pub mod markup;
pub mod offsets;
pub mod regions;
pub mod styled;
pub mod summary;

pub use display::{
    DisplayBlock, DisplayOptions, DisplaySpan, ListMarker, StyledText, TextRun, render_blocks,
};
pub use markup::{MarkupOptions, render_markup};
pub use offsets::OffsetUnit;
pub use styled::{StyledRun, TextAttributes, render_styled_runs};

/// Options for all three renderers, as loaded from configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderOptions {
    pub display: DisplayOptions,
    pub markup: MarkupOptions,
    pub offset_unit: OffsetUnit,
}
