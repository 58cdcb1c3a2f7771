use super::{
    cursor::Cursor,
    kinds::{
        CodeSpan, Emphasis, Link, Strikethrough,
        emphasis::{can_open, find_closer},
    },
    types::{InlineSpan, plain_text},
};

/// Parses a text run into a sequence of [`InlineSpan`]s.
///
/// # Precedence
/// Backslash escapes, then code spans (raw zones), images, links, emphasis
/// and finally strikethrough. Each construct is matched against its nearest
/// valid closer.
///
/// # Leniency
/// Scanning never fails. An opener without a valid closer is emitted as
/// literal text, so `*hello` stays `*hello`.
pub fn parse_inline(s: &str) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text = String::new();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineSpan>, text: &mut String) {
        if !text.is_empty() {
            out.push(InlineSpan::Text(std::mem::take(text)));
        }
    }

    while !cur.eof() {
        if let Some(c) = try_parse_escape(&mut cur) {
            text.push(c);
            continue;
        }
        if let Some(node) = try_parse_code_span(&mut cur) {
            flush_text(&mut out, &mut text);
            out.push(node);
            continue;
        }
        if let Some(node) = try_parse_link(&mut cur) {
            flush_text(&mut out, &mut text);
            out.push(node);
            continue;
        }
        if let Some((literal, node)) = try_parse_emphasis(&mut cur) {
            text.push_str(literal);
            flush_text(&mut out, &mut text);
            out.push(node);
            continue;
        }
        if let Some((literal, node)) = try_parse_strikethrough(&mut cur) {
            text.push_str(literal);
            flush_text(&mut out, &mut text);
            out.push(node);
            continue;
        }

        // Unmatched delimiter runs stay literal as a whole, so the tail of a
        // failed `**` is not retried as a single `*`.
        match cur.peek() {
            Some(b) if b == CodeSpan::TICK || Emphasis::is_delimiter(b) || b == Strikethrough::TILDE => {
                let n = cur.run_len(b);
                text.push_str(&cur.rest()[..n]);
                cur.bump_n(n);
            }
            _ => {
                if let Some(c) = cur.bump_char() {
                    text.push(c);
                }
            }
        }
    }

    flush_text(&mut out, &mut text);
    out
}

/// A backslash before ASCII punctuation yields that character literally.
fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<char> {
    if cur.peek() != Some(b'\\') {
        return None;
    }
    let next = cur.peek_at(1)?;
    if !next.is_ascii_punctuation() {
        return None;
    }
    cur.bump_n(2);
    Some(next as char)
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick run or if the run never closes.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let n = cur.run_len(CodeSpan::TICK);
    let inner_start = cur.i + n;
    let close = CodeSpan::find_close(cur.s, inner_start, n)?;
    let content = cur.s[inner_start..close].to_string();
    cur.i = close + n;
    Some(InlineSpan::CodeSpan(content))
}

/// Attempts to parse `[label](target)` or `![alt](target)`.
///
/// On failure the cursor is left untouched.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    let image = cur.starts_with(&[Link::IMAGE_BANG, Link::LABEL_OPEN]);
    if !image && cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }

    let open = cur.i + usize::from(image);
    let label_end = Link::find_label_end(cur.s, open)?;
    if cur.s.as_bytes().get(label_end + 1) != Some(&Link::DEST_OPEN) {
        return None;
    }
    let dest_end = Link::find_destination_end(cur.s, label_end + 1)?;

    let label = &cur.s[open + 1..label_end];
    let target = Link::clean_target(&cur.s[label_end + 2..dest_end]);
    cur.i = dest_end + 1;

    let label = parse_inline(label);
    Some(if image {
        InlineSpan::Image {
            alt: plain_text(&label),
            target,
        }
    } else {
        InlineSpan::Link { label, target }
    })
}

/// Attempts to parse an emphasis span from a `*` or `_` run.
///
/// The longest usable opener (up to three characters) is tried first; the
/// opener is taken from the end of the run and any leading surplus is
/// returned as literal text alongside the node.
fn try_parse_emphasis<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, InlineSpan)> {
    let d = cur.peek()?;
    if !Emphasis::is_delimiter(d) {
        return None;
    }

    let s = cur.s;
    let n = cur.run_len(d);
    let run_start = cur.i;
    let run_end = run_start + n;
    if !can_open(s, run_start, run_end, d) {
        return None;
    }

    for k in (1..=n.min(Emphasis::MAX_RUN)).rev() {
        if let Some(close) = find_closer(s, run_end, d, k) {
            let literal = &s[run_start..run_end - k];
            let children = parse_inline(&s[run_end..close]);
            cur.i = close + k;
            return Some((
                literal,
                InlineSpan::Emphasis {
                    strength: Emphasis::strength(k),
                    children,
                },
            ));
        }
    }
    None
}

/// Attempts to parse `~~text~~`.
fn try_parse_strikethrough<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, InlineSpan)> {
    if cur.peek() != Some(Strikethrough::TILDE) {
        return None;
    }

    let n = cur.run_len(Strikethrough::TILDE);
    if n < Strikethrough::RUN {
        return None;
    }
    let s = cur.s;
    let run_start = cur.i;
    let run_end = run_start + n;
    if !can_open(s, run_start, run_end, Strikethrough::TILDE) {
        return None;
    }

    let close = find_closer(s, run_end, Strikethrough::TILDE, Strikethrough::RUN)?;
    let literal = &s[run_start..run_end - Strikethrough::RUN];
    let children = parse_inline(&s[run_end..close]);
    cur.i = close + Strikethrough::RUN;
    Some((literal, InlineSpan::Strikethrough(children)))
}
