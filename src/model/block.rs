//! Content block definitions (the document tree).

use super::RichTextSpan;
use serde::Serialize;

/// One discrete unit of content from the source document tree.
///
/// The enumeration is closed: the block factory refuses discriminants
/// outside this set rather than dropping content. Nesting variants own
/// their children by value; children are fully resolved before the parent
/// is constructed, and no block is mutated afterwards.
///
/// List items carry no ordinal state. Numbered positions are computed at
/// render time from run-length position among same-variant siblings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    /// A plain paragraph of rich text
    Paragraph {
        id: String,
        rich_text: Vec<RichTextSpan>,
    },
    /// A heading (levels 1-3)
    Heading {
        id: String,
        level: u8,
        rich_text: Vec<RichTextSpan>,
    },
    /// An unordered list item, possibly with nested children
    BulletedListItem {
        id: String,
        rich_text: Vec<RichTextSpan>,
        children: Vec<Block>,
    },
    /// An ordered list item, possibly with nested children
    NumberedListItem {
        id: String,
        rich_text: Vec<RichTextSpan>,
        children: Vec<Block>,
    },
    /// A collapsible block: summary text plus child content
    Toggle {
        id: String,
        rich_text: Vec<RichTextSpan>,
        children: Vec<Block>,
    },
    /// A fenced code block; content is verbatim, never style-processed
    Code {
        id: String,
        language: String,
        text: String,
    },
    /// A block quote
    Quote {
        id: String,
        rich_text: Vec<RichTextSpan>,
    },
    /// A callout with a kind-specific label
    Callout {
        id: String,
        kind: CalloutKind,
        rich_text: Vec<RichTextSpan>,
    },
    /// An image with its caption as alt text
    Image {
        id: String,
        url: String,
        caption: String,
    },
    /// A horizontal rule
    Divider { id: String },
    /// An external embed referenced by URL
    Embed { id: String, url: String },
}

impl Block {
    /// Returns the source identifier of this block.
    pub fn id(&self) -> &str {
        match self {
            Block::Paragraph { id, .. }
            | Block::Heading { id, .. }
            | Block::BulletedListItem { id, .. }
            | Block::NumberedListItem { id, .. }
            | Block::Toggle { id, .. }
            | Block::Code { id, .. }
            | Block::Quote { id, .. }
            | Block::Callout { id, .. }
            | Block::Image { id, .. }
            | Block::Divider { id }
            | Block::Embed { id, .. } => id,
        }
    }

    /// Returns the discriminant name of this block.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { .. } => "heading",
            Block::BulletedListItem { .. } => "bulleted_list_item",
            Block::NumberedListItem { .. } => "numbered_list_item",
            Block::Toggle { .. } => "toggle",
            Block::Code { .. } => "code",
            Block::Quote { .. } => "quote",
            Block::Callout { .. } => "callout",
            Block::Image { .. } => "image",
            Block::Divider { .. } => "divider",
            Block::Embed { .. } => "embed",
        }
    }

    /// Returns true for bulleted and numbered list items.
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            Block::BulletedListItem { .. } | Block::NumberedListItem { .. }
        )
    }

    /// Returns true if `self` and `other` are the same list-item variant.
    ///
    /// Bulleted next to numbered is a break, not a merge.
    pub fn same_list_kind(&self, other: &Block) -> bool {
        matches!(
            (self, other),
            (
                Block::BulletedListItem { .. },
                Block::BulletedListItem { .. }
            ) | (
                Block::NumberedListItem { .. },
                Block::NumberedListItem { .. }
            )
        )
    }

    /// Returns the nested children of this block, if the variant nests.
    pub fn children(&self) -> &[Block] {
        match self {
            Block::BulletedListItem { children, .. }
            | Block::NumberedListItem { children, .. }
            | Block::Toggle { children, .. } => children,
            _ => &[],
        }
    }
}

/// Label category for callout blocks, derived from the source icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CalloutKind {
    #[default]
    Note,
    Tip,
    Warning,
    Important,
}

impl CalloutKind {
    /// Returns the display label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            CalloutKind::Note => "Note",
            CalloutKind::Tip => "Tip",
            CalloutKind::Warning => "Warning",
            CalloutKind::Important => "Important",
        }
    }

    /// Maps a source icon to a kind. Unrecognized icons fall back to Note.
    pub fn from_icon(icon: Option<&str>) -> Self {
        match icon {
            Some("💡") => CalloutKind::Tip,
            Some("⚠" | "⚠️") => CalloutKind::Warning,
            Some("❗" | "‼️") => CalloutKind::Important,
            _ => CalloutKind::Note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet(id: &str) -> Block {
        Block::BulletedListItem {
            id: id.to_string(),
            rich_text: vec![RichTextSpan::new("item")],
            children: Vec::new(),
        }
    }

    fn numbered(id: &str) -> Block {
        Block::NumberedListItem {
            id: id.to_string(),
            rich_text: vec![RichTextSpan::new("item")],
            children: Vec::new(),
        }
    }

    #[test]
    fn test_is_list_item() {
        assert!(bullet("a").is_list_item());
        assert!(numbered("b").is_list_item());
        assert!(!Block::Divider {
            id: "c".to_string()
        }
        .is_list_item());
    }

    #[test]
    fn test_same_list_kind() {
        assert!(bullet("a").same_list_kind(&bullet("b")));
        assert!(numbered("a").same_list_kind(&numbered("b")));
        // Differing list variants are a break, not a merge
        assert!(!bullet("a").same_list_kind(&numbered("b")));
        assert!(!numbered("a").same_list_kind(&bullet("b")));
    }

    #[test]
    fn test_block_id_and_kind() {
        let block = Block::Code {
            id: "code-1".to_string(),
            language: "rust".to_string(),
            text: "fn main() {}".to_string(),
        };
        assert_eq!(block.id(), "code-1");
        assert_eq!(block.kind(), "code");
    }

    #[test]
    fn test_callout_kind_from_icon() {
        assert_eq!(CalloutKind::from_icon(Some("💡")), CalloutKind::Tip);
        assert_eq!(CalloutKind::from_icon(Some("⚠️")), CalloutKind::Warning);
        assert_eq!(CalloutKind::from_icon(Some("🎉")), CalloutKind::Note);
        assert_eq!(CalloutKind::from_icon(None), CalloutKind::Note);
    }

    #[test]
    fn test_children_accessor() {
        let toggle = Block::Toggle {
            id: "t".to_string(),
            rich_text: vec![RichTextSpan::new("summary")],
            children: vec![bullet("child")],
        };
        assert_eq!(toggle.children().len(), 1);
        assert!(Block::Divider {
            id: "d".to_string()
        }
        .children()
        .is_empty());
    }
}
