//! # Block Tokenizing
//!
//! Two-step, line-oriented block splitting.
//!
//! ## Steps
//!
//! 1. **Line Classification** (`classify`): each line is classified into a kind
//!    and a content span, given only whether a fence is currently open
//! 2. **Tokenizing** (`tokenizer`): a `Tokenizer` carries the fence state across
//!    lines and emits one `RawBlock` per line
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`, `FenceRole`, `RawBlock`
//! - **`kinds`**: block marker types that own their delimiters
//! - **`classify`**: `LineClassifier` producing `LineClass` for each line
//! - **`tokenizer`**: `Tokenizer` state machine and the `tokenize` entry point
//!
//! ## Key Invariants
//!
//! - Every line maps to exactly one `RawBlock`
//! - Lines inside an open fence are always `CodeBlockBody`, whatever they contain
//! - An unterminated fence runs to end of input

pub mod classify;
pub mod kinds;
pub mod tokenizer;
pub mod types;

pub use classify::{LineClass, LineClassifier};
pub use tokenizer::{Tokenizer, tokenize};
pub use types::{BlockKind, FenceRole, RawBlock};
