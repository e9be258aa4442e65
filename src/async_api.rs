//! Async boundary for non-blocking retrieval and output.
//!
//! The core pipeline is synchronous and pure; suspension only happens at
//! the edges, when raw records are fetched and when the finished post is
//! written. Enable the `async` feature to use these APIs:
//!
//! ```toml
//! [dependencies]
//! blockdown = { version = "0.1", features = ["async"] }
//! ```

use crate::error::{Error, Result};
use crate::post::Post;
use crate::render::RenderOptions;
use crate::source::{RawBlock, RawProperties};
use chrono::NaiveDate;
use std::future::Future;
use std::path::{Path, PathBuf};

/// The retrieval collaborator.
///
/// Implementations fetch raw block records and the raw property map for a
/// page, handling pagination and retries internally; the pipeline consumes
/// the completed sequences.
pub trait ContentSource {
    /// Fetches the ordered raw block sequence for a page.
    fn fetch_blocks(
        &self,
        page_id: &str,
    ) -> impl Future<Output = Result<Vec<RawBlock>>> + Send;

    /// Fetches the raw property map for a page.
    fn fetch_properties(
        &self,
        page_id: &str,
    ) -> impl Future<Output = Result<RawProperties>> + Send;
}

/// Fetches a page from `source` and assembles it into a post.
///
/// Retrieval is awaited; the CPU-bound assembly runs on a blocking task.
pub async fn assemble_from_source<S: ContentSource>(
    source: &S,
    page_id: &str,
    date: NaiveDate,
    options: &RenderOptions,
) -> Result<Post> {
    let raw_blocks = source.fetch_blocks(page_id).await?;
    let raw_properties = source.fetch_properties(page_id).await?;

    let page_id = page_id.to_string();
    let options = options.clone();
    tokio::task::spawn_blocking(move || {
        let blocks = crate::source::resolve_blocks(&raw_blocks)?;
        let properties = crate::source::resolve_properties(&raw_properties, date);
        Post::assemble(&page_id, &blocks, &properties, &options)
    })
    .await
    .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?
}

/// Writes the post into `posts_dir` asynchronously; returns the path
/// written.
pub async fn write_post(post: &Post, posts_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = posts_dir.as_ref().join(&post.filename);
    tokio::fs::write(&path, &post.content).await?;
    Ok(path)
}
