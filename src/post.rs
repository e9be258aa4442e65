//! Post assembly: validation, block spacing, frontmatter, serialization.

use crate::error::{Result, ValidationError};
use crate::model::{Block, PostProperties};
use crate::normalize::normalize;
use crate::render::{MarkdownRenderer, RenderOptions};
use crate::slug;
use std::path::{Path, PathBuf};

/// An assembled, publishable post.
///
/// Construction reads the block sequence and properties once and produces
/// immutable `filename` and `content`; a change in desired output requires
/// assembling a new post.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Deterministic output filename: `{date}-{slug}.md`
    pub filename: String,
    /// Full rendered document: frontmatter plus Markdown body
    pub content: String,
}

impl Post {
    /// Assembles a post from resolved blocks and properties.
    ///
    /// Validates first (title, description, non-empty content), then builds
    /// the frontmatter, renders the body with the separator policy applied,
    /// and normalizes the result. Identical input produces byte-identical
    /// output.
    pub fn assemble(
        page_id: &str,
        blocks: &[Block],
        properties: &PostProperties,
        options: &RenderOptions,
    ) -> Result<Self> {
        validate(page_id, blocks, properties)?;

        let filename = slug::filename(&properties.title, properties.date);
        let frontmatter = properties.to_frontmatter()?;
        let body = render_body(blocks, options)?;
        let content = normalize(&format!("---\n{}---\n\n{}", frontmatter, body));

        log::debug!("assembled `{}` ({} bytes)", filename, content.len());
        Ok(Self { filename, content })
    }

    /// Writes the post into `posts_dir` and returns the path written.
    pub fn write_to_file(&self, posts_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = posts_dir.as_ref().join(&self.filename);
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }

    /// Returns the Markdown body without the frontmatter section.
    pub fn body(&self) -> &str {
        let Some(rest) = self.content.strip_prefix("---\n") else {
            return &self.content;
        };
        match rest.find("\n---\n") {
            Some(end) => rest[end + 5..].trim_start_matches('\n'),
            None => &self.content,
        }
    }

    /// Returns the body text with Markdown markup stripped.
    pub fn plain_text(&self) -> String {
        use pulldown_cmark::{Event, Parser};

        let mut out = String::new();
        for event in Parser::new(self.body()) {
            match event {
                Event::Text(text) | Event::Code(text) => out.push_str(&text),
                Event::SoftBreak | Event::HardBreak => out.push(' '),
                Event::End(_) => {
                    if !out.is_empty() && !out.ends_with('\n') {
                        out.push('\n');
                    }
                }
                _ => {}
            }
        }
        out.trim_end().to_string()
    }

    /// Number of words in the body text.
    pub fn word_count(&self) -> usize {
        self.plain_text().split_whitespace().count()
    }
}

/// Renders `blocks` into a Markdown body with the separator policy applied.
///
/// The output is not yet normalized; [`Post::assemble`] normalizes the
/// whole document at once.
pub fn render_body(blocks: &[Block], options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    let rendered = renderer.render_sequence(blocks, 0)?;

    let mut body = String::new();
    for (index, text) in rendered.iter().enumerate() {
        body.push_str(text);
        body.push_str(separator_after(blocks, index));
    }
    Ok(body)
}

/// Separator text following the block at `index`.
///
/// Blocks separate with a blank line, except between consecutive list items
/// of the same variant, which stay on adjacent lines so the list renders as
/// one contiguous block. Adjacent list items of differing variants (bulleted
/// next to numbered) are a break, not a merge.
fn separator_after(blocks: &[Block], index: usize) -> &'static str {
    let block = &blocks[index];
    // All blocks other than list items always get two newlines
    if !block.is_list_item() {
        return "\n\n";
    }
    match blocks.get(index + 1) {
        Some(next) if block.same_list_kind(next) => "\n",
        _ => "\n\n",
    }
}

fn validate(page_id: &str, blocks: &[Block], properties: &PostProperties) -> Result<()> {
    if properties.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle {
            page_id: page_id.to_string(),
        }
        .into());
    }
    if properties.description.trim().is_empty() {
        return Err(ValidationError::MissingDescription {
            page_id: page_id.to_string(),
            title: properties.title.clone(),
        }
        .into());
    }
    if blocks.is_empty() {
        return Err(ValidationError::NoContent {
            page_id: page_id.to_string(),
            title: properties.title.clone(),
        }
        .into());
    }
    Ok(())
}
