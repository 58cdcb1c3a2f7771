use serde::Serialize;

use crate::parsing::inline::InlineSpan;

/// Inline content of a heading, paragraph or table cell.
pub type InlineContent = Vec<InlineSpan>;

/// Column alignment taken from a table's delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Alignment {
    /// No colon: renderer emits no alignment.
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// CSS/HTML keyword for this alignment, if any.
    pub fn as_keyword(self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

/// One item of a list: its own ordered block sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ListItem {
    pub blocks: Vec<BlockNode>,
}

/// A parsed block node. Containers own their children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockNode {
    Heading {
        /// 1 through 6.
        level: u8,
        content: InlineContent,
        /// Document-unique anchor.
        slug: String,
    },
    Paragraph(InlineContent),
    List {
        ordered: bool,
        /// First ordinal of an ordered list; `None` for bullet lists.
        start: Option<u64>,
        /// Items are separated by, or contain, blank lines.
        loose: bool,
        items: Vec<ListItem>,
    },
    Blockquote(Vec<BlockNode>),
    /// A fenced code block. Lines are raw: never inline-parsed.
    CodeFence {
        language: Option<String>,
        lines: Vec<String>,
    },
    Table {
        header: Vec<InlineContent>,
        /// Same length as `header`.
        alignments: Vec<Alignment>,
        /// Every row has exactly `header.len()` cells.
        rows: Vec<Vec<InlineContent>>,
    },
    HorizontalRule,
    /// A run of blank lines between two blocks of the same sequence.
    Blank,
}
