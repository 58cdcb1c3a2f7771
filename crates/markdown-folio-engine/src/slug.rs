//! Heading anchor generation.
//!
//! Slugs are derived from the plain text of a heading and made unique per
//! document through a [`SlugRegistry`].

use std::collections::HashMap;

/// Slug used when a heading has no alphanumeric characters at all.
pub const FALLBACK_SLUG: &str = "section";

/// Derives the base slug for a heading's plain text.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `-` and trims hyphens from both ends. Alphanumeric is Unicode
/// aware, so CJK headings keep their characters.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Per-document record of the slugs handed out so far.
///
/// Created empty at the start of a parse and dropped with the document, so
/// separate documents never see each other's anchors.
#[derive(Debug, Default, Clone)]
pub struct SlugRegistry {
    counts: HashMap<String, usize>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a slug for `text` that is unique within this registry.
    ///
    /// The first occurrence of a base slug is returned as-is; the Nth
    /// repeat becomes `base-N`. If `base-N` was itself already handed out
    /// (a heading literally titled "intro 1"), N keeps advancing until a free
    /// slug is found.
    pub fn unique_slug(&mut self, text: &str) -> String {
        self.claim(slugify(text))
    }

    /// Registers `base` (or the next free `base-N`) and returns it.
    pub fn claim(&mut self, base: String) -> String {
        let Some(&seen) = self.counts.get(&base) else {
            self.counts.insert(base.clone(), 1);
            return base;
        };

        let mut n = seen;
        let mut candidate = format!("{base}-{n}");
        while self.counts.contains_key(&candidate) {
            n += 1;
            candidate = format!("{base}-{n}");
        }
        self.counts.insert(base, n + 1);
        self.counts.insert(candidate.clone(), 1);
        candidate
    }

    /// Number of distinct slugs handed out.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Hello World", "hello-world")]
    #[case("  Leading and trailing!  ", "leading-and-trailing")]
    #[case("string::trim", "string-trim")]
    #[case("C++ & Rust -- a comparison", "c-rust-a-comparison")]
    #[case("snake_case", "snake-case")]
    #[case("Version 2.0", "version-2-0")]
    #[case("第一章 风起云涌", "第一章-风起云涌")]
    #[case("Ünïcödé", "ünïcödé")]
    #[case("!!!", "section")]
    #[case("", "section")]
    fn slugify_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn duplicates_get_numbered_suffixes() {
        let mut reg = SlugRegistry::new();
        assert_eq!(reg.unique_slug("Notes"), "notes");
        assert_eq!(reg.unique_slug("Notes"), "notes-1");
        assert_eq!(reg.unique_slug("Notes"), "notes-2");
    }

    #[test]
    fn literal_suffix_collision_stays_unique() {
        let mut reg = SlugRegistry::new();
        assert_eq!(reg.unique_slug("intro"), "intro");
        assert_eq!(reg.unique_slug("intro 1"), "intro-1");
        assert_eq!(reg.unique_slug("intro"), "intro-2");
        assert_eq!(reg.unique_slug("intro"), "intro-3");
        assert_eq!(reg.len(), 4);
    }

    #[test]
    fn generated_suffix_does_not_shadow_later_heading() {
        let mut reg = SlugRegistry::new();
        assert_eq!(reg.unique_slug("intro"), "intro");
        assert_eq!(reg.unique_slug("intro"), "intro-1");
        assert_eq!(reg.unique_slug("intro 1"), "intro-1-1");
    }

    #[test]
    fn fallback_slugs_are_numbered_too() {
        let mut reg = SlugRegistry::new();
        assert_eq!(reg.unique_slug("???"), "section");
        assert_eq!(reg.unique_slug("..."), "section-1");
    }

    #[test]
    fn registries_are_independent() {
        let mut a = SlugRegistry::new();
        let mut b = SlugRegistry::new();
        assert_eq!(a.unique_slug("x"), "x");
        assert_eq!(b.unique_slug("x"), "x");
        assert!(!a.is_empty());
    }
}
