//! # Inline Kinds
//!
//! Inline-specific types that own their delimiters. The resolver asks these
//! types for their markers; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
