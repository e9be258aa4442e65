//! Raw records from the content source and their resolution into typed
//! blocks.
//!
//! The retrieval collaborator hands the pipeline an ordered sequence of raw
//! block records plus a raw property map, both already fetched and
//! deserialized from the remote API's JSON. Everything here turns those wire
//! shapes into the typed model, resolving children before parents and
//! refusing unknown discriminants outright rather than skipping blocks.

use crate::error::{Error, Result};
use crate::model::{plain_text, Block, CalloutKind, PostProperties, RichTextSpan, SpanStyle};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Maximum block nesting depth accepted from the content source.
///
/// The source data is a tree by construction, but depth is bounded
/// defensively before recursing.
pub const MAX_NESTING_DEPTH: usize = 16;

/// Style flags on a raw rich-text span.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAnnotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub strikethrough: bool,
}

/// One inline span as delivered by the content source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRichText {
    pub plain_text: String,
    #[serde(default)]
    pub annotations: RawAnnotations,
    #[serde(default)]
    pub href: Option<String>,
}

impl RawRichText {
    fn to_span(&self) -> RichTextSpan {
        RichTextSpan {
            text: self.plain_text.clone(),
            style: SpanStyle {
                bold: self.annotations.bold,
                italic: self.annotations.italic,
                code: self.annotations.code,
                strikethrough: self.annotations.strikethrough,
            },
            link: self.href.clone(),
        }
    }
}

/// One block record as delivered by the content source.
///
/// Immutable once fetched. Unknown wire fields are ignored; the payload
/// fields that matter are lifted to this shape by the retrieval
/// collaborator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBlock {
    /// Source identifier of the block
    pub id: String,
    /// Type discriminant
    #[serde(rename = "type")]
    pub block_type: String,
    /// Inline spans, for text-bearing types
    #[serde(default)]
    pub rich_text: Vec<RawRichText>,
    /// Nested child records, for nesting types
    #[serde(default)]
    pub children: Vec<RawBlock>,
    /// Whether the source reported children for this block
    #[serde(default)]
    pub has_children: bool,
    /// Language tag, for code blocks
    #[serde(default)]
    pub language: Option<String>,
    /// Target URL, for images and embeds
    #[serde(default)]
    pub url: Option<String>,
    /// Caption spans, for images
    #[serde(default)]
    pub caption: Vec<RawRichText>,
    /// Icon, for callouts
    #[serde(default)]
    pub icon: Option<String>,
}

/// The raw property map as delivered by the content source.
///
/// Must contain at least `title` and `description` for a post to pass
/// validation; everything else passes through to the frontmatter verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProperties {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Parses a JSON array of raw block records.
pub fn raw_blocks_from_json(json: &str) -> Result<Vec<RawBlock>> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a JSON object of raw properties.
pub fn raw_properties_from_json(json: &str) -> Result<RawProperties> {
    Ok(serde_json::from_str(json)?)
}

/// Resolves an ordered sequence of raw records into typed blocks.
///
/// Children are resolved before their parent, so the whole tree is
/// materialized bottom-up. Fails on the first unknown discriminant or
/// malformed record; no block is ever skipped.
pub fn resolve_blocks(raw: &[RawBlock]) -> Result<Vec<Block>> {
    let blocks = resolve_sequence(raw, 0)?;
    log::debug!("resolved {} top-level blocks", blocks.len());
    Ok(blocks)
}

/// Resolves a single raw record into a typed block.
pub fn resolve_block(raw: &RawBlock) -> Result<Block> {
    resolve_at(raw, 0)
}

/// Maps the raw property map into typed post properties.
///
/// `date` is the assembly date; the content source never supplies it.
/// Missing title or description map to empty strings here and fail
/// validation at assembly time.
pub fn resolve_properties(raw: &RawProperties, date: NaiveDate) -> PostProperties {
    PostProperties {
        title: raw.title.clone().unwrap_or_default(),
        description: raw.description.clone().unwrap_or_default(),
        date,
        tags: raw.tags.clone(),
        extra: raw.extra.clone(),
    }
}

fn resolve_sequence(raw: &[RawBlock], depth: usize) -> Result<Vec<Block>> {
    raw.iter().map(|record| resolve_at(record, depth)).collect()
}

fn resolve_at(raw: &RawBlock, depth: usize) -> Result<Block> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(Error::InvalidRecord {
            block_id: raw.id.clone(),
            message: format!("block nesting exceeds {} levels", MAX_NESTING_DEPTH),
        });
    }

    let id = raw.id.clone();
    let spans: Vec<RichTextSpan> = raw.rich_text.iter().map(RawRichText::to_span).collect();

    let block = match raw.block_type.as_str() {
        "paragraph" => Block::Paragraph {
            id,
            rich_text: spans,
        },
        "heading_1" => Block::Heading {
            id,
            level: 1,
            rich_text: spans,
        },
        "heading_2" => Block::Heading {
            id,
            level: 2,
            rich_text: spans,
        },
        "heading_3" => Block::Heading {
            id,
            level: 3,
            rich_text: spans,
        },
        "bulleted_list_item" => Block::BulletedListItem {
            id,
            rich_text: spans,
            children: resolve_sequence(&raw.children, depth + 1)?,
        },
        "numbered_list_item" => Block::NumberedListItem {
            id,
            rich_text: spans,
            children: resolve_sequence(&raw.children, depth + 1)?,
        },
        "toggle" => Block::Toggle {
            id,
            rich_text: spans,
            children: resolve_sequence(&raw.children, depth + 1)?,
        },
        "code" => Block::Code {
            id,
            language: raw.language.clone().unwrap_or_default(),
            text: plain_text(&spans),
        },
        "quote" => Block::Quote {
            id,
            rich_text: spans,
        },
        "callout" => Block::Callout {
            id,
            kind: CalloutKind::from_icon(raw.icon.as_deref()),
            rich_text: spans,
        },
        "image" => Block::Image {
            id,
            url: required_url(raw)?,
            caption: plain_text(&raw.caption.iter().map(RawRichText::to_span).collect::<Vec<_>>()),
        },
        "divider" => Block::Divider { id },
        "embed" => Block::Embed {
            id,
            url: required_url(raw)?,
        },
        other => {
            return Err(Error::UnsupportedBlockType {
                block_type: other.to_string(),
                block_id: raw.id.clone(),
            })
        }
    };

    Ok(block)
}

fn required_url(raw: &RawBlock) -> Result<String> {
    raw.url.clone().ok_or_else(|| Error::InvalidRecord {
        block_id: raw.id.clone(),
        message: format!("`{}` block has no url", raw.block_type),
    })
}
