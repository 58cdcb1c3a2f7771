use std::borrow::Cow;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    Document,
    blocks::{Alignment, BlockNode, InlineContent, ListItem},
    inline::{EmphasisStrength, InlineSpan},
};

use super::{AlignmentStyle, RenderOptions};

/// Renders `doc` as an HTML fragment.
///
/// Blocks are joined with `\n` and there is no trailing newline; an empty
/// document renders as an empty string.
pub fn render_document(doc: &Document, options: &RenderOptions) -> String {
    HtmlRenderer { options }.blocks(&doc.blocks, false)
}

struct HtmlRenderer<'o> {
    options: &'o RenderOptions,
}

impl HtmlRenderer<'_> {
    /// `tight` renders paragraphs as bare inline content, for items of a
    /// tight list.
    fn blocks(&self, blocks: &[BlockNode], tight: bool) -> String {
        blocks
            .iter()
            .filter(|b| **b != BlockNode::Blank)
            .map(|b| self.block(b, tight))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn block(&self, block: &BlockNode, tight: bool) -> String {
        match block {
            BlockNode::Heading {
                level,
                content,
                slug,
            } => format!(
                "<h{level} id=\"{}\">{}</h{level}>",
                encode_double_quoted_attribute(slug),
                inlines(content)
            ),
            BlockNode::Paragraph(content) if tight => inlines(content),
            BlockNode::Paragraph(content) => format!("<p>{}</p>", inlines(content)),
            BlockNode::List {
                ordered,
                start,
                loose,
                items,
            } => self.list(*ordered, *start, *loose, items),
            BlockNode::Blockquote(inner) => {
                format!("<blockquote>\n{}\n</blockquote>", self.blocks(inner, false))
            }
            BlockNode::CodeFence { language, lines } => self.code_fence(language.as_deref(), lines),
            BlockNode::Table {
                header,
                alignments,
                rows,
            } => self.table(header, alignments, rows),
            BlockNode::HorizontalRule => "<hr>".to_string(),
            BlockNode::Blank => String::new(),
        }
    }

    fn list(&self, ordered: bool, start: Option<u64>, loose: bool, items: &[ListItem]) -> String {
        let (tag, open) = match (ordered, start) {
            (true, Some(n)) if n != 1 => ("ol", format!("<ol start=\"{n}\">")),
            (true, _) => ("ol", "<ol>".to_string()),
            (false, _) => ("ul", "<ul>".to_string()),
        };
        let mut out = open;
        for item in items {
            out.push_str("\n  <li>");
            out.push_str(&self.blocks(&item.blocks, !loose));
            out.push_str("</li>");
        }
        out.push_str(&format!("\n</{tag}>"));
        out
    }

    fn code_fence(&self, language: Option<&str>, lines: &[String]) -> String {
        let class = match language {
            Some(lang) => format!(
                " class=\"{}\"",
                encode_double_quoted_attribute(&format!("{}{lang}", self.options.code_class_prefix))
            ),
            None => String::new(),
        };
        format!(
            "<pre><code{class}>{}</code></pre>",
            encode_text(&lines.join("\n"))
        )
    }

    fn table(
        &self,
        header: &[InlineContent],
        alignments: &[Alignment],
        rows: &[Vec<InlineContent>],
    ) -> String {
        let mut out = String::from("<table>\n  <thead>\n");
        out.push_str(&self.table_row("th", header, alignments));
        out.push_str("\n  </thead>");
        if !rows.is_empty() {
            out.push_str("\n  <tbody>");
            for row in rows {
                out.push('\n');
                out.push_str(&self.table_row("td", row, alignments));
            }
            out.push_str("\n  </tbody>");
        }
        out.push_str("\n</table>");
        out
    }

    fn table_row(&self, tag: &str, cells: &[InlineContent], alignments: &[Alignment]) -> String {
        let mut out = String::from("    <tr>");
        for (i, cell) in cells.iter().enumerate() {
            let align = alignments.get(i).copied().unwrap_or_default();
            out.push_str(&format!(
                "\n      <{tag}{}>{}</{tag}>",
                self.alignment_attr(align),
                inlines(cell)
            ));
        }
        out.push_str("\n    </tr>");
        out
    }

    fn alignment_attr(&self, align: Alignment) -> String {
        match (align.as_keyword(), self.options.table_alignment) {
            (None, _) => String::new(),
            (Some(kw), AlignmentStyle::Style) => format!(" style=\"text-align: {kw}\""),
            (Some(kw), AlignmentStyle::Attribute) => format!(" align=\"{kw}\""),
        }
    }
}

fn inlines(spans: &[InlineSpan]) -> String {
    spans.iter().map(inline).collect()
}

fn inline(span: &InlineSpan) -> Cow<'_, str> {
    match span {
        InlineSpan::Text(t) => encode_text(t),
        InlineSpan::Emphasis { strength, children } => {
            let inner = inlines(children);
            let html = match strength {
                EmphasisStrength::Weak => format!("<em>{inner}</em>"),
                EmphasisStrength::Strong => format!("<strong>{inner}</strong>"),
                EmphasisStrength::Both => format!("<strong><em>{inner}</em></strong>"),
            };
            Cow::Owned(html)
        }
        InlineSpan::Strikethrough(children) => Cow::Owned(format!("<del>{}</del>", inlines(children))),
        InlineSpan::CodeSpan(code) => Cow::Owned(format!("<code>{}</code>", encode_text(code))),
        InlineSpan::Link { label, target } => Cow::Owned(format!(
            "<a href=\"{}\">{}</a>",
            encode_double_quoted_attribute(target),
            inlines(label)
        )),
        InlineSpan::Image { alt, target } => Cow::Owned(format!(
            "<img src=\"{}\" alt=\"{}\">",
            encode_double_quoted_attribute(target),
            encode_double_quoted_attribute(alt)
        )),
    }
}
