use serde::Serialize;

/// How strongly an emphasis span binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmphasisStrength {
    /// `*text*` or `_text_`
    Weak,
    /// `**text**` or `__text__`
    Strong,
    /// `***text***`
    Both,
}

/// A parsed inline span. Children own their nested spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineSpan {
    /// Literal text with escapes already resolved.
    Text(String),
    Emphasis {
        strength: EmphasisStrength,
        children: Vec<InlineSpan>,
    },
    Strikethrough(Vec<InlineSpan>),
    /// A code span. This is a raw zone: the content is never re-scanned.
    CodeSpan(String),
    Link {
        label: Vec<InlineSpan>,
        target: String,
    },
    Image {
        alt: String,
        target: String,
    },
}

impl InlineSpan {
    /// Convenience constructor for a text span.
    pub fn text(s: impl Into<String>) -> Self {
        InlineSpan::Text(s.into())
    }
}

/// Flattens spans to their visible text, dropping all markup.
///
/// Used for slugs, TOC labels and image alt text.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    push_plain_text(spans, &mut out);
    out
}

fn push_plain_text(spans: &[InlineSpan], out: &mut String) {
    for span in spans {
        match span {
            InlineSpan::Text(t) | InlineSpan::CodeSpan(t) => out.push_str(t),
            InlineSpan::Emphasis { children, .. } | InlineSpan::Strikethrough(children) => {
                push_plain_text(children, out)
            }
            InlineSpan::Link { label, .. } => push_plain_text(label, out),
            InlineSpan::Image { alt, .. } => out.push_str(alt),
        }
    }
}
