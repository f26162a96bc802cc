//! # Inline Span Resolution
//!
//! Finds bold, inline code and italic spans within one block's content.
//!
//! ## Architecture
//!
//! Resolution is an explicit ordered scan rather than cascading substitutions.
//! Each style gets its own pass, in priority order:
//!
//! 1. Bold: `**…**`, shortest match
//! 2. Code: `` `…` ``, shortest match
//! 3. Italic: `*…*` where neither delimiter touches another `*`
//!
//! A pass only looks at text no earlier pass has claimed, so spans can never
//! overlap and a higher-priority style always wins.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and `InlineStyle`
//! - **`kinds`**: delimiter constants owned per style
//! - **`cursor`**: `Cursor` for scanning one unclaimed region
//! - **`resolver`**: `resolve_spans()` entry point and the per-style scanners

pub mod cursor;
pub mod kinds;
pub mod resolver;
pub mod types;

pub use resolver::resolve_spans;
pub use types::{InlineSpan, InlineStyle};
