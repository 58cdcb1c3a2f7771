//! Markdown to HTML engine for markdown-folio.
//!
//! A post goes through four stages:
//!
//! 1. [`frontmatter`] splits off the `---` metadata block
//! 2. [`parsing`] builds the block tree and scans inline runs, assigning
//!    heading anchors via [`slug`]
//! 3. [`render`] walks the tree into an HTML fragment
//! 4. [`toc`] lists the headings for sidebar navigation
//!
//! Every stage is total: malformed input degrades to literal text, never to
//! an error.

pub mod frontmatter;
pub mod parsing;
pub mod render;
pub mod slug;
pub mod toc;

use serde::Serialize;

pub use frontmatter::{Frontmatter, FrontmatterResult, extract_frontmatter};
pub use parsing::{Document, inline::parse_inline, parse_document};
pub use render::{AlignmentStyle, RenderOptions, render_document};
pub use slug::{SlugRegistry, slugify};
pub use toc::{TocEntry, render_toc_html};

/// Everything produced from one Markdown source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub frontmatter: Frontmatter,
    pub html: String,
    pub toc: Vec<TocEntry>,
}

/// Renders a full post with default options.
pub fn render_markdown(text: &str) -> Rendered {
    render_markdown_with(text, &RenderOptions::default())
}

/// Renders a full post with caller-supplied [`RenderOptions`].
pub fn render_markdown_with(text: &str, options: &RenderOptions) -> Rendered {
    let extracted = extract_frontmatter(text);
    let doc = parse_document(extracted.body());
    log::debug!(
        "rendering document (frontmatter: {}, body starts at line {})",
        extracted.had_delimiters(),
        extracted.body_line()
    );

    Rendered {
        html: render_document(&doc, options),
        toc: doc.toc(),
        frontmatter: extracted.into_frontmatter(),
    }
}
