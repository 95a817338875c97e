//! Whole-document selection stages: horizontal-rule removal, heading-only
//! extraction, and plain-text removal.
//!
//! The two extraction stages are opposite selections over the same
//! classifier: heading extraction keeps the narrowest slice of the document,
//! plain-text removal keeps every *structural* line and drops the prose.
//! Both are fence-aware — a `# looks-like-a-heading` line inside a fenced
//! block is code, not a heading.
//!
//! All three stages delete whole lines. Lines are split
//! terminator-inclusive so a dropped line removes its own newline, never
//! the previous line's.

use crate::pipeline::line::{classify, is_fence_delimiter, is_heading, FenceTracker, LineKind};

/// Delete every horizontal-rule line. Runs as a whole-document pass after
/// the other line-level stages so rules produced by earlier rewrites are
/// caught too.
pub fn remove_horizontal_rules(text: &str) -> String {
    text.split_inclusive('\n')
        .filter(|line| classify(line) != LineKind::HorizontalRule)
        .collect()
}

/// Keep only heading lines; discard everything else including blanks.
///
/// Fence delimiters are dropped (they are not headings) but still toggle
/// the tracker, so heading-shaped lines inside code blocks never leak into
/// the outline.
pub fn extract_headings(text: &str) -> String {
    let mut fence = FenceTracker::new();
    text.split_inclusive('\n')
        .filter(|line| {
            let inside = fence.observe(line);
            !inside && !is_fence_delimiter(line) && is_heading(line)
        })
        .collect()
}

/// Keep headings, list items, horizontal rules, and blank lines; drop all
/// prose. Fenced code blocks are dropped wholesale, delimiters included.
pub fn remove_plain_text(text: &str) -> String {
    let mut fence = FenceTracker::new();
    text.split_inclusive('\n')
        .filter(|line| {
            if fence.observe(line) || is_fence_delimiter(line) {
                return false;
            }
            matches!(
                classify(line),
                LineKind::Heading | LineKind::ListItem | LineKind::HorizontalRule | LineKind::Blank
            )
        })
        .collect()
}
