//! Table of contents entries and their HTML list form.

use serde::Serialize;

/// One heading as it appears in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: u8,
    /// Plain text of the heading, markup stripped.
    pub text: String,
    pub slug: String,
}

/// Renders `entries` as a flat `<ul class="toc-list">`, indenting each item
/// two spaces per level below 1. Entries deeper than `max_level` are left
/// out; nothing left to show yields an empty string.
pub fn render_toc_html(entries: &[TocEntry], max_level: u8) -> String {
    let items: Vec<String> = entries
        .iter()
        .filter(|entry| entry.level <= max_level)
        .map(|entry| {
            format!(
                "{indent}<li class=\"toc-h{level}\"><a href=\"#{slug}\">{text}</a></li>",
                indent = "  ".repeat(usize::from(entry.level.saturating_sub(1))),
                level = entry.level,
                slug = html_escape::encode_double_quoted_attribute(&entry.slug),
                text = html_escape::encode_text(&entry.text),
            )
        })
        .collect();

    if items.is_empty() {
        return String::new();
    }
    format!("<ul class=\"toc-list\">\n{}\n</ul>", items.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(level: u8, text: &str, slug: &str) -> TocEntry {
        TocEntry {
            level,
            text: text.to_string(),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn renders_indented_items() {
        let html = render_toc_html(
            &[entry(1, "Intro", "intro"), entry(2, "A & B", "a-b")],
            6,
        );
        assert_eq!(
            html,
            "<ul class=\"toc-list\">\n\
             <li class=\"toc-h1\"><a href=\"#intro\">Intro</a></li>\n  \
             <li class=\"toc-h2\"><a href=\"#a-b\">A &amp; B</a></li>\n\
             </ul>"
        );
    }

    #[test]
    fn max_level_filters_deep_entries() {
        let html = render_toc_html(&[entry(1, "A", "a"), entry(3, "C", "c")], 2);
        assert!(html.contains("#a"));
        assert!(!html.contains("#c"));
    }

    #[test]
    fn nothing_to_show_is_empty() {
        assert_eq!(render_toc_html(&[], 6), "");
        assert_eq!(render_toc_html(&[entry(4, "Deep", "deep")], 3), "");
    }
}
