//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK` - raw zone that suppresses other parsing
//! - **`Link`**: `[label](target)`, and `![alt](target)` for images
//! - **`Emphasis`** / **`Strikethrough`**: `*`, `_` and `~~` runs plus the
//!   flanking rules deciding which runs may open or close
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strikethrough};
pub use link::Link;
