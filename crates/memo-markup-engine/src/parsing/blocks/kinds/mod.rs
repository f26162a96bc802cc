//! # Block Kinds
//!
//! Block-specific marker types that own their syntax delimiters. The classifier
//! asks these types whether a line opens their block; it never hardcodes `# ` or
//! ```` ``` ```` itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod rule;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListItem;
pub use rule::HorizontalRule;
