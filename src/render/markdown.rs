//! Markdown renderer implementation.

use super::RenderOptions;
use crate::error::{Error, Result};
use crate::model::{Block, RichTextSpan};

/// Markdown renderer.
///
/// Rendering is deterministic and side-effect-free: the same block tree and
/// options always produce the same text.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Creates a new renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders one block to Markdown.
    ///
    /// `ordinal` is the 1-based position among immediately preceding
    /// same-variant siblings; it only matters for numbered list items and
    /// is ignored by every other variant.
    pub fn render_block(&self, block: &Block, ordinal: usize) -> Result<String> {
        self.render_at(block, ordinal, 0)
    }

    /// Renders a sibling sequence, computing numbered ordinals from
    /// run-length position. Returns one string per block; the caller owns
    /// the separators between them.
    pub(crate) fn render_sequence(&self, blocks: &[Block], depth: usize) -> Result<Vec<String>> {
        if depth > self.options.max_depth {
            return Err(Error::Render(format!(
                "block nesting exceeds {} levels",
                self.options.max_depth
            )));
        }

        let mut rendered = Vec::with_capacity(blocks.len());
        let mut ordinal = 0;
        for (index, block) in blocks.iter().enumerate() {
            ordinal = next_ordinal(blocks, index, ordinal);
            rendered.push(self.render_at(block, ordinal, depth)?);
        }
        Ok(rendered)
    }

    fn render_at(&self, block: &Block, ordinal: usize, depth: usize) -> Result<String> {
        let text = match block {
            Block::Paragraph { rich_text, .. } => render_rich_text(rich_text),
            Block::Heading {
                level, rich_text, ..
            } => {
                format!(
                    "{} {}",
                    "#".repeat(*level as usize),
                    render_rich_text(rich_text)
                )
            }
            Block::Quote { rich_text, .. } => format!("> {}", render_rich_text(rich_text)),
            Block::Callout {
                kind, rich_text, ..
            } => self
                .options
                .callout_template
                .replace("{label}", kind.label())
                .replace("{text}", &render_rich_text(rich_text)),
            Block::BulletedListItem {
                rich_text,
                children,
                ..
            } => {
                let mut out = format!(
                    "{} {}",
                    self.options.list_marker,
                    render_rich_text(rich_text)
                );
                self.append_children(&mut out, children, depth)?;
                out
            }
            Block::NumberedListItem {
                rich_text,
                children,
                ..
            } => {
                let mut out = format!("{}. {}", ordinal.max(1), render_rich_text(rich_text));
                self.append_children(&mut out, children, depth)?;
                out
            }
            Block::Toggle {
                rich_text,
                children,
                ..
            } => {
                let mut out = render_rich_text(rich_text);
                if !children.is_empty() {
                    out.push_str("\n\n");
                    out.push_str(&self.render_sequence(children, depth + 1)?.join("\n\n"));
                }
                out
            }
            Block::Code { language, text, .. } => {
                format!("```{}\n{}\n```", language, text)
            }
            Block::Image { url, caption, .. } => format!("![{}]({})", caption, url),
            Block::Divider { .. } => "---".to_string(),
            Block::Embed { url, .. } => self.options.embed_template.replace("{url}", url),
        };
        Ok(text)
    }

    /// Renders list-item children, indented one level deeper.
    fn append_children(&self, out: &mut String, children: &[Block], depth: usize) -> Result<()> {
        if children.is_empty() {
            return Ok(());
        }
        let rendered = self.render_sequence(children, depth + 1)?;
        for line in rendered.join("\n").lines() {
            out.push('\n');
            out.push_str(&self.options.indent);
            out.push_str(line);
        }
        Ok(())
    }
}

/// Renders a sequence of inline spans to Markdown.
pub fn render_rich_text(spans: &[RichTextSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        out.push_str(&render_span(span));
    }
    out
}

/// Renders one span, nesting style markers in a fixed order so combined
/// flags always produce valid Markdown: code innermost, then bold, then
/// strikethrough, then italic, then the link wrapping everything.
fn render_span(span: &RichTextSpan) -> String {
    let mut text = span.text.clone();
    if span.style.code {
        text = format!("`{}`", text);
    }
    if span.style.bold {
        text = format!("**{}**", text);
    }
    if span.style.strikethrough {
        text = format!("~~{}~~", text);
    }
    if span.style.italic {
        text = format!("*{}*", text);
    }
    if let Some(url) = &span.link {
        text = format!("[{}]({})", text, url);
    }
    text
}

/// Computes the 1-based ordinal for the block at `index`, given the
/// ordinal assigned to the previous sibling. Non-numbered blocks reset the
/// run and take ordinal 0.
fn next_ordinal(blocks: &[Block], index: usize, previous: usize) -> usize {
    match blocks[index] {
        Block::NumberedListItem { .. } => {
            if index > 0 && matches!(blocks[index - 1], Block::NumberedListItem { .. }) {
                previous + 1
            } else {
                1
            }
        }
        _ => 0,
    }
}
