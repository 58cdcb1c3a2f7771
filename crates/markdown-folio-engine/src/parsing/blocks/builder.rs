use crate::{
    parsing::{
        inline::{parse_inline, plain_text},
        lines::{indent_width, is_blank, strip_indent},
    },
    slug::SlugRegistry,
};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{BlockQuote, CodeFence, FenceSig, ListMarker, Paragraph, Table},
    types::{Alignment, BlockNode, InlineContent, ListItem},
};

/// Recursive-descent block parser.
///
/// Walks a line sequence once, classifying each line and handing it to the
/// matching block handler. Containers (blockquotes, list items) collect
/// their de-prefixed lines and recurse with the same slug registry, so
/// heading anchors stay unique across the whole document.
pub struct BlockBuilder<'r> {
    classifier: MarkdownLineClassifier,
    slugs: &'r mut SlugRegistry,
}

impl<'r> BlockBuilder<'r> {
    pub fn new(slugs: &'r mut SlugRegistry) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            slugs,
        }
    }

    /// Parses `lines` into a block sequence.
    ///
    /// Runs of blank lines between blocks become a single
    /// [`BlockNode::Blank`]; leading and trailing blank lines produce
    /// nothing.
    pub fn build(&mut self, lines: &[String]) -> Vec<BlockNode> {
        let mut out = vec![];
        let mut pending_blank = false;
        let mut i = 0;

        while i < lines.len() {
            let Some((node, consumed)) = self.open_block(lines, i) else {
                pending_blank = true;
                i += 1;
                continue;
            };
            if pending_blank && !out.is_empty() {
                out.push(BlockNode::Blank);
            }
            pending_blank = false;
            out.push(node);
            i += consumed;
        }

        out
    }

    /// Opens the block starting at line `i`, returning it with the number of
    /// lines it consumed. Blank lines open nothing.
    fn open_block(&mut self, lines: &[String], i: usize) -> Option<(BlockNode, usize)> {
        let opened = match self.classify_at(lines, i) {
            LineClass::Blank => return None,
            LineClass::ThematicBreak => (BlockNode::HorizontalRule, 1),
            LineClass::FenceOpen { sig, language } => self.fence(lines, i, sig, language),
            LineClass::Heading { level, text } => (self.heading(level, &text), 1),
            LineClass::BlockQuote { rest } => self.block_quote(lines, i, rest),
            LineClass::ListItem(marker) => self.list(lines, i, marker),
            LineClass::TableStart => self.table(lines, i),
            LineClass::Text => self.paragraph(lines, i),
        };
        Some(opened)
    }

    fn classify_at(&self, lines: &[String], i: usize) -> LineClass {
        self.classifier
            .classify(&lines[i], lines.get(i + 1).map(String::as_str))
    }

    fn heading(&mut self, level: u8, text: &str) -> BlockNode {
        let content = parse_inline(text);
        let slug = self.slugs.unique_slug(&plain_text(&content));
        BlockNode::Heading {
            level,
            content,
            slug,
        }
    }

    /// Captures raw lines up to the matching closer. An unclosed fence runs
    /// to the end of `lines`.
    fn fence(
        &mut self,
        lines: &[String],
        i: usize,
        sig: FenceSig,
        language: Option<String>,
    ) -> (BlockNode, usize) {
        let body = &lines[i + 1..];
        let (content, consumed) = match body.iter().position(|l| CodeFence::closes(sig, l)) {
            Some(close) => (&body[..close], close + 2),
            None => {
                log::trace!(
                    "unclosed {:?} fence auto-closed after {} lines",
                    sig.kind,
                    body.len()
                );
                (body, body.len() + 1)
            }
        };
        (
            BlockNode::CodeFence {
                language,
                lines: content.to_vec(),
            },
            consumed,
        )
    }

    /// Groups `>` lines and their lazy continuations, then recurses.
    fn block_quote(&mut self, lines: &[String], i: usize, first: String) -> (BlockNode, usize) {
        let mut para = OpenParagraph::default();
        para.push(&self.classifier, &first);
        let mut inner = vec![first];
        let mut j = i + 1;

        while j < lines.len() {
            if let Some(rest) = BlockQuote::strip_prefix(&lines[j]) {
                para.push(&self.classifier, rest);
                inner.push(rest.to_string());
                j += 1;
                continue;
            }
            if para.is_open() && self.classify_at(lines, j) == LineClass::Text {
                para.push(&self.classifier, &lines[j]);
                inner.push(lines[j].clone());
                j += 1;
                continue;
            }
            break;
        }

        (BlockNode::Blockquote(self.build(&inner)), j - i)
    }

    /// Parses a run of sibling items of the same kind starting at `i`.
    fn list(&mut self, lines: &[String], i: usize, first: ListMarker) -> (BlockNode, usize) {
        let ordered = first.ordered;
        let start = if ordered { first.number } else { None };
        let mut items = vec![];
        let mut loose = false;
        let mut marker = first;
        let mut j = i + 1;

        loop {
            let mut para = OpenParagraph::default();
            para.push(&self.classifier, &marker.content);
            let mut item_lines = vec![marker.content.clone()];
            let mut next_marker = None;

            while j < lines.len() {
                let line = &lines[j];

                if is_blank(line) {
                    let run_end = j + lines[j..].iter().take_while(|l| is_blank(l)).count();
                    if run_end - j >= 2 || run_end == lines.len() {
                        break;
                    }
                    let after = &lines[run_end];
                    if indent_width(after) >= marker.content_col {
                        for _ in j..run_end {
                            para.push(&self.classifier, "");
                            item_lines.push(String::new());
                        }
                        j = run_end;
                        continue;
                    }
                    if let LineClass::ListItem(m) = self.classify_at(lines, run_end)
                        && marker.is_sibling(&m)
                    {
                        loose = true;
                        next_marker = Some(m);
                        j = run_end + 1;
                    }
                    break;
                }

                if indent_width(line) >= marker.content_col {
                    let content = strip_indent(line, marker.content_col);
                    para.push(&self.classifier, &content);
                    item_lines.push(content);
                    j += 1;
                    continue;
                }

                match self.classify_at(lines, j) {
                    LineClass::ListItem(m) if marker.is_sibling(&m) => {
                        next_marker = Some(m);
                        j += 1;
                    }
                    LineClass::Text if para.is_open() => {
                        para.push(&self.classifier, line);
                        item_lines.push(line.trim_start().to_string());
                        j += 1;
                        continue;
                    }
                    _ => {}
                }
                break;
            }

            let blocks = self.build(&item_lines);
            loose |= blocks.contains(&BlockNode::Blank);
            items.push(ListItem { blocks });

            match next_marker {
                Some(m) => marker = m,
                None => break,
            }
        }

        (
            BlockNode::List {
                ordered,
                start,
                loose,
                items,
            },
            j - i,
        )
    }

    /// Header row, delimiter row, then body rows until a blank or pipe-less
    /// line.
    fn table(&mut self, lines: &[String], i: usize) -> (BlockNode, usize) {
        let header_cells = Table::split_cells(&lines[i]);
        let width = header_cells.len();
        let alignments = Table::fit_row(
            Table::split_cells(&lines[i + 1])
                .iter()
                .map(|c| Table::alignment(c))
                .collect::<Vec<Alignment>>(),
            width,
        );
        let header: Vec<InlineContent> = header_cells.iter().map(|c| parse_inline(c)).collect();

        let mut rows = vec![];
        let mut j = i + 2;
        while j < lines.len() && Table::is_row(&lines[j]) {
            let cells: Vec<InlineContent> = Table::split_cells(&lines[j])
                .iter()
                .map(|c| parse_inline(c))
                .collect();
            rows.push(Table::fit_row(cells, width));
            j += 1;
        }

        (
            BlockNode::Table {
                header,
                alignments,
                rows,
            },
            j - i,
        )
    }

    /// Consecutive text lines joined into one run.
    fn paragraph(&mut self, lines: &[String], i: usize) -> (BlockNode, usize) {
        let mut j = i + 1;
        while j < lines.len() && self.classify_at(lines, j) == LineClass::Text {
            j += 1;
        }
        let text = Paragraph::join(&lines[i..j]);
        (BlockNode::Paragraph(parse_inline(&text)), j - i)
    }
}

/// Follows the lines collected for a container and tracks whether they end
/// inside an open paragraph, the only block a lazy continuation line may
/// extend. Fences, headings, tables and blank lines all close it.
#[derive(Debug, Default)]
struct OpenParagraph {
    fence: Option<FenceSig>,
    in_table: bool,
    open: bool,
    last_had_pipe: bool,
}

impl OpenParagraph {
    fn push(&mut self, classifier: &MarkdownLineClassifier, line: &str) {
        if let Some(sig) = self.fence {
            if CodeFence::closes(sig, line) {
                self.fence = None;
            }
            return;
        }
        if self.in_table {
            if Table::is_row(line) {
                return;
            }
            self.in_table = false;
        }
        // a header row is only recognised once its delimiter row arrives
        if self.open && self.last_had_pipe && Table::is_delimiter_row(line) {
            self.in_table = true;
            self.open = false;
            return;
        }

        self.open = match classifier.classify(line, None) {
            LineClass::Text => true,
            LineClass::FenceOpen { sig, .. } => {
                self.fence = Some(sig);
                false
            }
            LineClass::ListItem(m) => classifier.classify(&m.content, None) == LineClass::Text,
            LineClass::BlockQuote { rest } => classifier.classify(&rest, None) == LineClass::Text,
            _ => false,
        };
        self.last_had_pipe = line.contains(Table::PIPE);
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
