//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` by an ordered predicate chain (first match wins)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups classified
//!    lines into `BlockNode`s, recursing into blockquotes and list items
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `ListItem`, `Alignment`)
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` recursive descent over the line sequence
//!
//! ## Key Invariants
//!
//! - Every line is consumed exactly once by the enclosing sequence
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Nesting depth is bounded only by the input's own nesting

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Alignment, BlockNode, InlineContent, ListItem};
