/// Columns a tab advances to (next multiple of this width).
pub const TAB_WIDTH: usize = 4;

/// Splits source text into logical lines.
///
/// `\r\n` and lone `\r` are both treated as line terminators, so callers
/// never see carriage returns. A trailing newline does not produce an extra
/// empty line.
pub fn split_lines(source: &str) -> Vec<String> {
    if !source.contains('\r') {
        return source.lines().map(str::to_string).collect();
    }
    source
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Returns true if the line contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Width of the leading whitespace in columns, expanding tabs.
pub fn indent_width(line: &str) -> usize {
    let mut col = 0usize;
    for c in line.chars() {
        match c {
            ' ' => col += 1,
            '\t' => col += TAB_WIDTH - col % TAB_WIDTH,
            _ => break,
        }
    }
    col
}

/// Removes up to `cols` columns of leading whitespace.
///
/// A tab that straddles the cut point is replaced by the spaces it would
/// still occupy, so relative indentation of the remainder is preserved.
pub fn strip_indent(line: &str, cols: usize) -> String {
    let mut col = 0usize;
    for (i, c) in line.char_indices() {
        if col >= cols {
            return line[i..].to_string();
        }
        match c {
            ' ' => col += 1,
            '\t' => {
                let next = col + TAB_WIDTH - col % TAB_WIDTH;
                if next > cols {
                    let mut out = " ".repeat(next - cols);
                    out.push_str(&line[i + 1..]);
                    return out;
                }
                col = next;
            }
            _ => return line[i..].to_string(),
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_normalizes_line_endings() {
        assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_empty_source() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn split_keeps_interior_blank_lines() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn indent_counts_tabs_to_next_stop() {
        assert_eq!(indent_width("    x"), 4);
        assert_eq!(indent_width("\tx"), 4);
        assert_eq!(indent_width("  \tx"), 4);
        assert_eq!(indent_width("x"), 0);
    }

    #[test]
    fn strip_indent_partial() {
        assert_eq!(strip_indent("    code", 2), "  code");
        assert_eq!(strip_indent("  text", 4), "text");
    }

    #[test]
    fn strip_indent_splits_tab() {
        assert_eq!(strip_indent("\tx", 2), "  x");
    }

    #[test]
    fn strip_indent_all_whitespace() {
        assert_eq!(strip_indent("   ", 2), " ");
        assert_eq!(strip_indent("  ", 4), "");
    }
}
