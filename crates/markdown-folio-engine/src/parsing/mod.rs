pub mod blocks;
pub mod inline;
pub mod lines;

use serde::Serialize;

use crate::{slug::SlugRegistry, toc::TocEntry};
use blocks::{BlockBuilder, BlockNode};
use inline::{InlineSpan, plain_text};

/// Marker appended to an excerpt that was cut short.
pub const ELLIPSIS: char = '…';

/// A parsed Markdown body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<BlockNode>,
}

/// Parses a Markdown body (frontmatter already removed) into a [`Document`].
///
/// Never fails: malformed constructs degrade to paragraphs or literal text.
/// Heading slugs come from a registry scoped to this call.
pub fn parse_document(body: &str) -> Document {
    let lines = lines::split_lines(body);
    let mut slugs = SlugRegistry::new();
    let blocks = BlockBuilder::new(&mut slugs).build(&lines);

    log::debug!(
        "parsed {} lines into {} blocks with {} headings",
        lines.len(),
        blocks.len(),
        slugs.len()
    );

    Document { blocks }
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Table of contents: one entry per heading in document order, including
    /// headings nested inside blockquotes and list items.
    pub fn toc(&self) -> Vec<TocEntry> {
        let mut entries = vec![];
        collect_headings(&self.blocks, &mut entries);
        entries
    }

    /// Plain text of the first level-1 heading, if any.
    pub fn first_heading_text(&self) -> Option<String> {
        self.toc()
            .into_iter()
            .find(|entry| entry.level == 1)
            .map(|entry| entry.text)
    }

    /// Plain text of the first top-level paragraph that isn't just an image,
    /// cut to at most `max_chars` characters plus [`ELLIPSIS`] when longer.
    pub fn excerpt(&self, max_chars: usize) -> Option<String> {
        let text = self.blocks.iter().find_map(|block| match block {
            BlockNode::Paragraph(content) if !is_image_only(content) => {
                Some(plain_text(content))
            }
            _ => None,
        })?;

        if text.chars().count() <= max_chars {
            return Some(text);
        }
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.truncate(cut.trim_end().len());
        cut.push(ELLIPSIS);
        Some(cut)
    }
}

fn collect_headings(blocks: &[BlockNode], out: &mut Vec<TocEntry>) {
    for block in blocks {
        match block {
            BlockNode::Heading {
                level,
                content,
                slug,
            } => out.push(TocEntry {
                level: *level,
                text: plain_text(content),
                slug: slug.clone(),
            }),
            BlockNode::Blockquote(inner) => collect_headings(inner, out),
            BlockNode::List { items, .. } => {
                for item in items {
                    collect_headings(&item.blocks, out);
                }
            }
            _ => {}
        }
    }
}

fn is_image_only(content: &[InlineSpan]) -> bool {
    let mut saw_image = false;
    for span in content {
        match span {
            InlineSpan::Image { .. } => saw_image = true,
            InlineSpan::Text(t) if t.trim().is_empty() => {}
            _ => return false,
        }
    }
    saw_image
}
