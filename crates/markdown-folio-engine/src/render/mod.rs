//! # Rendering
//!
//! Turns a parsed [`Document`](crate::parsing::Document) into an HTML
//! fragment. The table of contents is produced separately from the HTML so
//! callers can lay it out wherever they like.

pub mod html;

use serde::Deserialize;

pub use html::render_document;

/// How table column alignment is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentStyle {
    /// `style="text-align: center"`
    #[default]
    Style,
    /// `align="center"`
    Attribute,
}

/// Knobs for the HTML renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prefix for the class attribute carrying a code fence's language.
    pub code_class_prefix: String,
    pub table_alignment: AlignmentStyle,
    /// Deepest heading level included in the TOC list.
    pub toc_max_level: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            code_class_prefix: "language-".to_string(),
            table_alignment: AlignmentStyle::default(),
            toc_max_level: 6,
        }
    }
}
