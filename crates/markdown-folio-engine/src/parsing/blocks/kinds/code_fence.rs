#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn marker(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// An opening or closing fence line: marker kind and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
}

pub struct CodeFence;

impl CodeFence {
    /// Shortest marker run that forms a fence.
    pub const MIN_RUN: usize = 3;

    /// Detects a fence marker at the start of a line (leading whitespace
    /// allowed). Returns the signature and the text after the marker run.
    pub fn sig(line: &str) -> Option<(FenceSig, &str)> {
        let t = line.trim_start();
        let kind = match t.chars().next()? {
            '`' => FenceKind::Backticks,
            '~' => FenceKind::Tildes,
            _ => return None,
        };
        let len = t.chars().take_while(|&c| c == kind.marker()).count();
        if len < Self::MIN_RUN {
            return None;
        }
        // markers are ASCII, so `len` chars == `len` bytes
        let rest = &t[len..];
        // a backtick after the run means an inline code span, not a fence
        if kind == FenceKind::Backticks && rest.contains('`') {
            return None;
        }
        Some((FenceSig { kind, len }, rest))
    }

    /// Language tag from the text following an opening marker.
    pub fn language(info: &str) -> Option<String> {
        let info = info.trim();
        (!info.is_empty()).then(|| info.to_string())
    }

    /// Whether `line` closes a fence opened with `open`.
    ///
    /// The closer must be only marker characters (surrounding whitespace
    /// allowed) of the same kind, at least as long as the opener.
    pub fn closes(open: FenceSig, line: &str) -> bool {
        match Self::sig(line) {
            Some((sig, rest)) => {
                sig.kind == open.kind && sig.len >= open.len && rest.trim().is_empty()
            }
            None => false,
        }
    }
}
