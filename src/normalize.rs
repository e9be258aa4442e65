//! Output normalization.
//!
//! The assembler already emits deterministic text; normalization makes the
//! final document stable under repeated runs: newline runs collapse to
//! blank-line separators, trailing horizontal whitespace is stripped, and
//! the document ends with exactly one newline. Fenced code blocks pass
//! through verbatim. The pass is idempotent: normalizing its own output is
//! a fixed point.

use regex::Regex;
use std::sync::LazyLock;

static RE_TRAILING_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+$").unwrap());

/// Normalizes a rendered document.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_fence = false;
    let mut blank_run = 0usize;

    for line in input.lines() {
        let is_fence_delimiter = line.trim_start().starts_with("```");

        if in_fence {
            out.push_str(line);
            out.push('\n');
            if is_fence_delimiter {
                in_fence = false;
            }
            continue;
        }

        if is_fence_delimiter {
            in_fence = true;
            blank_run = 0;
            out.push_str(line);
            out.push('\n');
            continue;
        }

        let line = RE_TRAILING_WHITESPACE.replace(line, "");
        if line.is_empty() {
            blank_run += 1;
            // At most one blank line between content lines
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }

        out.push_str(&line);
        out.push('\n');
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
