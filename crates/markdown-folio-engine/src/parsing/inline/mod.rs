//! # Inline Parsing
//!
//! Cursor-based inline scanning with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the logical
//! text of inline-eligible blocks (paragraphs, headings, table cells).
//!
//! The scanner walks left to right with a [`cursor::Cursor`]:
//! - Code spans are raw zones and suppress all other inline parsing
//! - Links, images, emphasis and strikethrough recurse into their content
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum and `plain_text` flattening
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte/char scanning
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{EmphasisStrength, InlineSpan, plain_text};
