//! # blockdown
//!
//! Assembles content blocks fetched from a content-management API into
//! publishable Markdown posts: YAML frontmatter, adjacency-aware block
//! spacing, and deterministic date-slug filenames.
//!
//! The retrieval collaborator hands over an ordered sequence of raw block
//! records plus a raw property map; blockdown resolves them into a typed
//! block tree, renders each block, applies the list-aware separator policy,
//! validates, and serializes the result.
//!
//! ## Quick Start
//!
//! ```no_run
//! use blockdown::{source, Publisher};
//!
//! fn main() -> blockdown::Result<()> {
//!     let raw_blocks = source::raw_blocks_from_json(r#"[
//!         {"id": "b1", "type": "heading_1",
//!          "rich_text": [{"plain_text": "Hello"}]},
//!         {"id": "b2", "type": "paragraph",
//!          "rich_text": [{"plain_text": "First post."}]}
//!     ]"#)?;
//!     let raw_properties = source::raw_properties_from_json(
//!         r#"{"title": "Hello", "description": "A first post"}"#,
//!     )?;
//!
//!     let post = Publisher::new().assemble("page-id", &raw_blocks, &raw_properties)?;
//!     post.write_to_file("posts")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `async`: async boundary helpers (`ContentSource`, async write) built
//!   on Tokio

pub mod error;
pub mod model;
pub mod normalize;
pub mod post;
pub mod render;
pub mod slug;
pub mod source;

#[cfg(feature = "async")]
pub mod async_api;

// Re-exports
pub use error::{Error, Result, ValidationError};
pub use model::{Block, CalloutKind, PostProperties, RichTextSpan, SpanStyle};
pub use post::{render_body, Post};
pub use render::{render_rich_text, MarkdownRenderer, RenderOptions};
pub use source::{
    raw_blocks_from_json, raw_properties_from_json, resolve_blocks, resolve_properties, RawBlock,
    RawProperties, RawRichText, MAX_NESTING_DEPTH,
};

use chrono::NaiveDate;

/// Assembles a post from raw records with default options, dated today.
pub fn assemble(
    page_id: &str,
    raw_blocks: &[RawBlock],
    raw_properties: &RawProperties,
) -> Result<Post> {
    Publisher::new().assemble(page_id, raw_blocks, raw_properties)
}

/// Assembles a post with explicit options and assembly date.
pub fn assemble_with_options(
    page_id: &str,
    raw_blocks: &[RawBlock],
    raw_properties: &RawProperties,
    date: NaiveDate,
    options: &RenderOptions,
) -> Result<Post> {
    Publisher::new()
        .with_options(options.clone())
        .with_date(date)
        .assemble(page_id, raw_blocks, raw_properties)
}

/// Builder for assembling posts.
///
/// # Example
///
/// ```no_run
/// use blockdown::{Publisher, RenderOptions};
/// use chrono::NaiveDate;
///
/// # fn example(raw_blocks: &[blockdown::RawBlock], raw_properties: &blockdown::RawProperties) -> blockdown::Result<()> {
/// let post = Publisher::new()
///     .with_options(RenderOptions::default().with_list_marker('*'))
///     .with_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .assemble("page-id", raw_blocks, raw_properties)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Publisher {
    options: RenderOptions,
    date: Option<NaiveDate>,
}

impl Publisher {
    /// Creates a new publisher with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Fixes the assembly date. Defaults to today when unset.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Resolves raw records and assembles the post.
    pub fn assemble(
        &self,
        page_id: &str,
        raw_blocks: &[RawBlock],
        raw_properties: &RawProperties,
    ) -> Result<Post> {
        let blocks = source::resolve_blocks(raw_blocks)?;
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let properties = source::resolve_properties(raw_properties, date);
        Post::assemble(page_id, &blocks, &properties, &self.options)
    }
}
