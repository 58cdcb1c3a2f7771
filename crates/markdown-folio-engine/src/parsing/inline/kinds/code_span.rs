use crate::parsing::inline::cursor::run_len_at;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them,
/// and delimiter searches for every other construct skip over them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Finds the closing backtick run for an opening run of length `n`
    /// whose content starts at byte `from`.
    ///
    /// Only a run of exactly `n` backticks closes; shorter or longer runs are
    /// part of the content. Returns the byte index where the closing run
    /// starts.
    pub fn find_close(s: &str, from: usize, n: usize) -> Option<usize> {
        let b = s.as_bytes();
        let mut j = from;
        while j < b.len() {
            if b[j] == Self::TICK {
                let m = run_len_at(b, j, Self::TICK);
                if m == n {
                    return Some(j);
                }
                j += m;
            } else {
                j += 1;
            }
        }
        None
    }

    /// Index just past the code span that opens at `j`, or past the bare
    /// backtick run if it never closes.
    ///
    /// Used by other delimiter searches to step over raw zones.
    pub fn skip(s: &str, j: usize) -> usize {
        let n = run_len_at(s.as_bytes(), j, Self::TICK);
        match Self::find_close(s, j + n, n) {
            Some(close) => close + n,
            None => j + n,
        }
    }
}
