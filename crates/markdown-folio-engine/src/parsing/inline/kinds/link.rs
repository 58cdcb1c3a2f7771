use super::code_span::CodeSpan;

/// Link and image inline types with owned delimiter constants.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
    /// Prefix that turns a link into an image.
    pub const IMAGE_BANG: u8 = b'!';

    /// Finds the `]` matching the `[` at byte `open`.
    ///
    /// Nested brackets must balance; escaped brackets and code spans are
    /// skipped.
    pub fn find_label_end(s: &str, open: usize) -> Option<usize> {
        Self::find_balanced(s, open, Self::LABEL_OPEN, Self::LABEL_CLOSE, true)
    }

    /// Finds the `)` matching the `(` at byte `open`.
    pub fn find_destination_end(s: &str, open: usize) -> Option<usize> {
        Self::find_balanced(s, open, Self::DEST_OPEN, Self::DEST_CLOSE, false)
    }

    /// Index just past the `)` of a complete link or image starting at `j`.
    ///
    /// Used by other delimiter searches to step over links, whose labels
    /// and targets bind tighter than emphasis.
    pub fn skip(s: &str, j: usize) -> Option<usize> {
        let b = s.as_bytes();
        let open = if b.get(j) == Some(&Self::IMAGE_BANG) { j + 1 } else { j };
        if b.get(open) != Some(&Self::LABEL_OPEN) {
            return None;
        }
        let label_end = Self::find_label_end(s, open)?;
        if b.get(label_end + 1) != Some(&Self::DEST_OPEN) {
            return None;
        }
        Self::find_destination_end(s, label_end + 1).map(|end| end + 1)
    }

    /// Normalizes a raw destination: trims whitespace and drops `<...>`.
    pub fn clean_target(raw: &str) -> String {
        let t = raw.trim();
        t.strip_prefix('<')
            .and_then(|inner| inner.strip_suffix('>'))
            .unwrap_or(t)
            .to_string()
    }

    fn find_balanced(
        s: &str,
        open: usize,
        open_b: u8,
        close_b: u8,
        skip_code: bool,
    ) -> Option<usize> {
        let b = s.as_bytes();
        let mut depth = 0usize;
        let mut j = open;
        while j < b.len() {
            match b[j] {
                b'\\' => {
                    j += 2;
                    continue;
                }
                CodeSpan::TICK if skip_code => {
                    j = CodeSpan::skip(s, j);
                    continue;
                }
                x if x == open_b => depth += 1,
                x if x == close_b => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(j);
                    }
                }
                _ => {}
            }
            j += 1;
        }
        None
    }
}
