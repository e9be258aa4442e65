//! Filename and identity policy.
//!
//! A post's filename is a pure function of its title and assembly date:
//! `{YYYY-MM-DD}-{slug}.md`. No randomness, no counters; collision handling
//! is the caller's concern.

use chrono::NaiveDate;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Builds the output filename for a post.
pub fn filename(title: &str, date: NaiveDate) -> String {
    format!("{}-{}.md", date.format("%Y-%m-%d"), slugify(title))
}

/// Converts a title to a lowercase, ASCII-hyphenated slug.
///
/// Accented letters are transliterated by NFD decomposition with combining
/// marks stripped; punctuation and non-ASCII symbols are dropped;
/// whitespace, hyphens, and underscores collapse to single hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_filename_shape() {
        assert_eq!(
            filename("Hello, World!", date()),
            "2024-01-01-hello-world.md"
        );
    }

    #[test]
    fn test_filename_is_pure() {
        let first = filename("Some Title", date());
        let second = filename("Some Title", date());
        assert_eq!(first, second);
    }

    #[test]
    fn test_slug_lowercases() {
        assert_eq!(slugify("UPPER Case"), "upper-case");
    }

    #[test]
    fn test_slug_strips_punctuation() {
        assert_eq!(slugify("What's new in v2.0?"), "whats-new-in-v20");
    }

    #[test]
    fn test_slug_transliterates_accents() {
        assert_eq!(slugify("Café au lait"), "cafe-au-lait");
        assert_eq!(slugify("Über straße"), "uber-strae");
    }

    #[test]
    fn test_slug_collapses_separators() {
        assert_eq!(slugify("a  -  b___c"), "a-b-c");
        assert_eq!(slugify("  leading and trailing  "), "leading-and-trailing");
    }

    #[test]
    fn test_slug_drops_non_ascii_symbols() {
        assert_eq!(slugify("Ship it 🚀 now"), "ship-it-now");
    }
}
