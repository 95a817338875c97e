//! Full formatting clear — the most destructive stage.
//!
//! Strips every inline marker while keeping the human-readable text
//! (image alt text, link text, span contents), then peels the structural
//! prefixes off each line and drops pure horizontal rules. The pipeline
//! applies this last when enabled, so it supersedes whatever the finer
//! toggles left behind.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pipeline::line::is_horizontal_rule;

static RE_IMAGE_ALT: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]+\)").unwrap());
static RE_LINK_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]\([^)]+\)").unwrap());
static RE_BOLD_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static RE_BOLD_UNDERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());
static RE_ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static RE_ITALIC_UNDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.*?)_").unwrap());
static RE_STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.*?)~~").unwrap());
static RE_CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").unwrap());
static RE_HEADING_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+\s*").unwrap());
static RE_LIST_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([*\-+]|\d+\.)\s+").unwrap());
static RE_QUOTE_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*>\s?").unwrap());

/// Remove all common markdown formatting, keeping inner text.
///
/// Inline passes run on the whole text in a fixed order — images before
/// links (an image is a link with a bang), double markers before single
/// (`**` before `*`, `__` before `_`) so bold is not half-eaten by the
/// italic rule. Each pass is non-greedy and single; leftovers of
/// pathological nesting are not rescanned.
pub fn clear_formatting(text: &str) -> String {
    let s = RE_IMAGE_ALT.replace_all(text, "$1");
    let s = RE_LINK_TEXT.replace_all(&s, "$1");
    let s = RE_BOLD_STARS.replace_all(&s, "$1");
    let s = RE_BOLD_UNDERS.replace_all(&s, "$1");
    let s = RE_ITALIC_STAR.replace_all(&s, "$1");
    let s = RE_ITALIC_UNDER.replace_all(&s, "$1");
    let s = RE_STRIKE.replace_all(&s, "$1");
    let s = RE_CODE_SPAN.replace_all(&s, "$1");

    // Line pass, terminator-inclusive: a dropped rule line takes its own
    // newline with it. The marker regexes run on the line body only so
    // `\s*` cannot eat a terminator.
    let mut out = String::with_capacity(s.len());
    for chunk in s.split_inclusive('\n') {
        let (body, eol) = match chunk.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (chunk, ""),
        };
        if is_horizontal_rule(body) {
            continue;
        }
        let body = RE_HEADING_MARK.replace(body, "");
        let body = RE_LIST_MARK.replace(&body, "");
        let body = RE_QUOTE_MARK.replace(&body, "");
        out.push_str(&body);
        out.push_str(eol);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destructive_clear_scenario() {
        let input = "# Title\n**bold** and [link](url) and ![img](url)\n---";
        assert_eq!(clear_formatting(input), "Title\nbold and link and img\n");
    }

    #[test]
    fn image_alt_kept_link_text_kept() {
        assert_eq!(clear_formatting("![alt](a.png) [txt](b)"), "alt txt");
    }

    #[test]
    fn double_markers_before_single() {
        assert_eq!(clear_formatting("**b** *i* __b__ _i_"), "b i b i");
    }

    #[test]
    fn inline_code_unwrapped() {
        assert_eq!(clear_formatting("run `cargo test` now"), "run cargo test now");
    }

    #[test]
    fn heading_and_list_markers_stripped() {
        assert_eq!(clear_formatting("## Head\n- item\n3. third"), "Head\nitem\nthird");
    }

    #[test]
    fn blockquote_marker_stripped() {
        assert_eq!(clear_formatting("> quoted\n>tight"), "quoted\ntight");
    }

    #[test]
    fn strikethrough_unwrapped() {
        assert_eq!(clear_formatting("~~old~~ new"), "old new");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(clear_formatting("no markup here"), "no markup here");
    }
}
