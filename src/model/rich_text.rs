//! Inline text spans and their style flags.

use serde::Serialize;

/// Style flags for an inline run of text.
///
/// Flags combine additively: a span may be bold and italic at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpanStyle {
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Inline code
    pub code: bool,
    /// Strikethrough
    pub strikethrough: bool,
}

impl SpanStyle {
    /// Creates a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bold style.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    /// Creates an italic style.
    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    /// Creates an inline-code style.
    pub fn code() -> Self {
        Self {
            code: true,
            ..Default::default()
        }
    }

    /// Returns true if any style flag is set.
    pub fn has_formatting(&self) -> bool {
        self.bold || self.italic || self.code || self.strikethrough
    }
}

/// An inline run of text carrying style flags and an optional link target.
///
/// The leaf unit of textual content within a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RichTextSpan {
    /// The text content
    pub text: String,
    /// Style applied to this span
    pub style: SpanStyle,
    /// Hyperlink target, if the span is a link
    pub link: Option<String>,
}

impl RichTextSpan {
    /// Creates a plain span with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::default(),
            link: None,
        }
    }

    /// Creates a span with the specified style.
    pub fn with_style(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
            link: None,
        }
    }

    /// Creates a link span with default style.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::default(),
            link: Some(url.into()),
        }
    }

    /// Returns true if this span has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Returns the concatenated text of `spans` with all styling ignored.
pub fn plain_text(spans: &[RichTextSpan]) -> String {
    let mut result = String::new();
    for span in spans {
        result.push_str(&span.text);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_flags_combine() {
        let style = SpanStyle {
            bold: true,
            italic: true,
            ..Default::default()
        };
        assert!(style.has_formatting());
        assert!(!SpanStyle::default().has_formatting());
    }

    #[test]
    fn test_plain_text_ignores_styling() {
        let spans = vec![
            RichTextSpan::with_style("Hello ", SpanStyle::bold()),
            RichTextSpan::link("world", "https://example.com"),
        ];
        assert_eq!(plain_text(&spans), "Hello world");
    }

    #[test]
    fn test_empty_span() {
        assert!(RichTextSpan::new("").is_empty());
        assert!(!RichTextSpan::new("x").is_empty());
    }
}
