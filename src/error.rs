//! Error types for the blockdown library.

use std::io;
use thiserror::Error;

/// Result type alias for blockdown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the blockdown library.
///
/// Every variant is fatal to the document being assembled: the pipeline
/// never emits a partial post and never drops a block silently.
#[derive(Error, Debug)]
pub enum Error {
    /// The properties and blocks are not sufficient to publish a post.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A raw block carried a type discriminant outside the known enumeration.
    #[error("unsupported block type `{block_type}` (block {block_id})")]
    UnsupportedBlockType { block_type: String, block_id: String },

    /// A raw block was recognized but its payload is malformed.
    #[error("invalid block record {block_id}: {message}")]
    InvalidRecord { block_id: String, message: String },

    /// Failure while producing text output.
    #[error("render error: {0}")]
    Render(String),

    /// Frontmatter serialization error.
    #[error("frontmatter serialization error: {0}")]
    Serialize(String),

    /// Raw record deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

/// Validation failures raised before any rendering work.
///
/// Each variant names the offending field and the source page so the caller
/// can locate and fix the content.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The page has no usable title.
    #[error("page {page_id} is missing a title")]
    MissingTitle { page_id: String },

    /// The page has no usable description.
    #[error("`{title}` ({page_id}) is missing a description")]
    MissingDescription { page_id: String, title: String },

    /// The page has no content blocks.
    #[error("`{title}` ({page_id}) has no content blocks")]
    NoContent { page_id: String, title: String },
}
