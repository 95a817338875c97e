//! Line classification and code-fence tracking.
//!
//! Every stage that needs to know what a line *is* asks this module, so the
//! structural rules live in exactly one place. Stages re-classify lines
//! fresh on every pass rather than sharing a parse tree — the rules are
//! cheap literal checks, and re-scanning keeps each stage a pure function
//! of its input text.
//!
//! The rules are deliberately simple prefix/shape checks, not CommonMark:
//!
//! - **Fence delimiter**: trimmed line starts with ` ``` `
//! - **Heading**: trimmed line starts with `#` (any count; consumers clamp
//!   the semantic level to 1–6)
//! - **List item**: trimmed line starts with `- `, `* `, or digits + `.` +
//!   whitespace
//! - **Horizontal rule**: trimmed line is three or more repetitions of a
//!   single rule character (`-`, `*`, or `_`)

/// Structural role of a single line, derived fresh per stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Trimmed line starts with `#`.
    Heading,
    /// Unordered (`- `, `* `) or ordered (`1. `) list entry.
    ListItem,
    /// Three or more of the same rule character, nothing else.
    HorizontalRule,
    /// Opening or closing triple-backtick fence line.
    FenceDelimiter,
    /// Empty or whitespace-only.
    Blank,
    /// Anything else.
    Plain,
}

/// Classify a line by the literal pattern rules above.
///
/// Fence delimiters win over everything (a ` ``` ` line is never a heading
/// or rule), then headings, rules, and list items in that order.
pub fn classify(line: &str) -> LineKind {
    if is_fence_delimiter(line) {
        LineKind::FenceDelimiter
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else if is_heading(line) {
        LineKind::Heading
    } else if is_horizontal_rule(line) {
        LineKind::HorizontalRule
    } else if is_list_item(line) {
        LineKind::ListItem
    } else {
        LineKind::Plain
    }
}

/// A fence delimiter is any line whose trimmed content starts with ` ``` `.
/// The language tag (` ```rust `) is part of the delimiter line.
pub fn is_fence_delimiter(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// Trimmed line starts with `#`. No level bound here; level semantics
/// belong to the consumers (numbering treats 7+ hashes as non-standard
/// and passes them through).
pub fn is_heading(line: &str) -> bool {
    line.trim().starts_with('#')
}

/// List-item rule shared by the collapse and plain-text-removal stages.
pub fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
        return true;
    }
    // Ordered item: one or more digits, a dot, then whitespace.
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }
    let mut rest = trimmed.chars().skip(digits);
    rest.next() == Some('.') && rest.next().is_some_and(|c| c.is_whitespace())
}

/// Three or more repetitions of a single rule character, with only
/// surrounding whitespace on the line. Mixed characters (`-*-`) are not a
/// rule.
pub fn is_horizontal_rule(line: &str) -> bool {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !matches!(first, '-' | '*' | '_') {
        return false;
    }
    trimmed.len() >= 3 && chars.all(|c| c == first)
}

/// A heading split into its rewrite-relevant parts.
///
/// Only produced for well-formed headings: hashes at column 0, then an
/// optional whitespace run, then the content. The whitespace run is kept
/// verbatim so rewrites can reproduce the author's spacing exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Count of leading `#` characters (not clamped).
    pub level: usize,
    /// The literal whitespace between the hashes and the content.
    pub space: &'a str,
    /// Everything after the whitespace run.
    pub content: &'a str,
}

/// Structural parse of a heading line for the shift and numbering stages.
///
/// Returns `None` for indented heading-looking lines — those are malformed
/// by the rewrite rules and pass through untouched, even though the broader
/// [`is_heading`] classification (used by the extraction stages) accepts
/// them.
pub fn parse_heading(line: &str) -> Option<Heading<'_>> {
    if !line.starts_with('#') {
        return None;
    }
    let level = line.chars().take_while(|&c| c == '#').count();
    let rest = &line[level..];
    let space_len = rest
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(rest.len(), |(i, _)| i);
    Some(Heading {
        level,
        space: &rest[..space_len],
        content: &rest[space_len..],
    })
}

/// Tracks whether the scan position is inside a fenced code block.
///
/// One tracker per stage invocation; never shared across stages. An
/// unterminated fence simply leaves the flag set for the rest of the
/// document — that is the defined fallback, not an error.
#[derive(Debug, Default)]
pub struct FenceTracker {
    inside: bool,
}

impl FenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line. Returns `true` if the line was inside a fenced
    /// block *before* this call — the delimiter line itself reports the
    /// state outside the block it opens (or inside the block it closes),
    /// so callers must special-case delimiters via [`is_fence_delimiter`].
    pub fn observe(&mut self, line: &str) -> bool {
        let was_inside = self.inside;
        if is_fence_delimiter(line) {
            self.inside = !self.inside;
        }
        was_inside
    }

    /// Current state without consuming a line.
    pub fn inside(&self) -> bool {
        self.inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_basic_lines() {
        assert_eq!(classify("# Title"), LineKind::Heading);
        assert_eq!(classify("   ## indented"), LineKind::Heading);
        assert_eq!(classify("- item"), LineKind::ListItem);
        assert_eq!(classify("* item"), LineKind::ListItem);
        assert_eq!(classify("12. item"), LineKind::ListItem);
        assert_eq!(classify("---"), LineKind::HorizontalRule);
        assert_eq!(classify("```rust"), LineKind::FenceDelimiter);
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(classify("just text"), LineKind::Plain);
    }

    #[test]
    fn list_item_requires_marker_space() {
        assert!(!is_list_item("-no space"));
        assert!(!is_list_item("*emphasis*"));
        assert!(!is_list_item("1.no space"));
        assert!(is_list_item("1.\titem"));
    }

    #[test]
    fn horizontal_rule_single_character_only() {
        assert!(is_horizontal_rule("***"));
        assert!(is_horizontal_rule("  ____  "));
        assert!(is_horizontal_rule("----------"));
        assert!(!is_horizontal_rule("--"));
        assert!(!is_horizontal_rule("-*-"));
        assert!(!is_horizontal_rule("--- text"));
    }

    #[test]
    fn parse_heading_splits_parts() {
        let h = parse_heading("##  Two spaces").unwrap();
        assert_eq!(h.level, 2);
        assert_eq!(h.space, "  ");
        assert_eq!(h.content, "Two spaces");
    }

    #[test]
    fn parse_heading_no_space() {
        let h = parse_heading("###Tight").unwrap();
        assert_eq!(h.level, 3);
        assert_eq!(h.space, "");
        assert_eq!(h.content, "Tight");
    }

    #[test]
    fn parse_heading_rejects_indented() {
        assert!(parse_heading("  # indented").is_none());
        assert!(parse_heading("plain").is_none());
    }

    #[test]
    fn parse_heading_bare_hashes() {
        let h = parse_heading("##").unwrap();
        assert_eq!(h.level, 2);
        assert_eq!(h.space, "");
        assert_eq!(h.content, "");
    }

    #[test]
    fn fence_tracker_toggles() {
        let mut t = FenceTracker::new();
        assert!(!t.observe("# outside"));
        assert!(!t.observe("```"));
        assert!(t.observe("# inside"));
        assert!(t.observe("```"));
        assert!(!t.observe("# outside again"));
    }

    #[test]
    fn fence_tracker_unterminated_stays_inside() {
        let mut t = FenceTracker::new();
        t.observe("```");
        t.observe("code");
        assert!(t.inside());
    }
}
