//! Inline-marker stripping and bold-spacing repair.
//!
//! These stages substitute inline spans (`**bold**`, `[text](url)`, …) and
//! are the one place where regexes earn their keep: span extraction needs
//! non-greedy matching and bracket shapes that a prefix check cannot
//! express. All patterns are compiled once via [`once_cell::sync::Lazy`].
//!
//! All five stages work line-by-line semantics-wise (a span never spans a
//! fence check — they are *not* fence-aware), except [`fix_bold_spacing`]
//! which scans the whole text because a bold span may wrap across a line
//! break.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]\([^)]+\)").unwrap());
static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[.*?\]\([^)]+\)").unwrap());
static RE_STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.*?)~~").unwrap());
// DOTALL: a bold span may wrap across a line break.
static RE_BOLD_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\*\*(.+?)\*\*").unwrap());

/// `**text**` → `text`. Non-greedy, single pass: nested bold left over by
/// the first pass is not re-processed.
pub fn remove_bold(text: &str) -> String {
    per_line(text, |line| RE_BOLD.replace_all(line, "$1").into_owned())
}

/// `[text](url)` → `text`.
pub fn remove_links(text: &str) -> String {
    per_line(text, |line| RE_LINK.replace_all(line, "$1").into_owned())
}

/// `![alt](url)` → nothing. Unlike link removal the alt text is discarded:
/// an image caption floating in running text reads worse than no image.
pub fn remove_images(text: &str) -> String {
    per_line(text, |line| RE_IMAGE.replace_all(line, "").into_owned())
}

/// `~~text~~` → `text`.
pub fn remove_strikethrough(text: &str) -> String {
    per_line(text, |line| RE_STRIKE.replace_all(line, "$1").into_owned())
}

fn per_line(text: &str, f: impl Fn(&str) -> String) -> String {
    text.split('\n').map(f).collect::<Vec<_>>().join("\n")
}

/// Insert one space after a bold span that abuts the following text.
///
/// Renderers mis-parse `**Note:**next` — the closing marker glues onto the
/// punctuation inside the span. The repair fires only when the span's
/// content *ends* with a character that is neither ASCII-alphanumeric nor
/// whitespace and the closing `**` is followed by no whitespace at all
/// (end of input counts as "no whitespace"). Spans ending in a plain word
/// and spans already followed by whitespace are left alone, so running the
/// stage twice changes nothing.
pub fn fix_bold_spacing(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for caps in RE_BOLD_SPAN.captures_iter(text) {
        let m = caps.get(0).expect("match group 0 always present");
        out.push_str(&text[last..m.end()]);
        last = m.end();

        let ends_with_symbol = caps[1]
            .chars()
            .next_back()
            .is_some_and(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace());
        let followed_by_ws = text[m.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_whitespace());
        if ends_with_symbol && !followed_by_ws {
            out.push(' ');
        }
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_removed_keeps_text() {
        assert_eq!(remove_bold("a **b** c"), "a b c");
        assert_eq!(remove_bold("**x** and **y**"), "x and y");
    }

    #[test]
    fn bold_single_pass_not_nested() {
        // The first pass unwraps the outer markers; the leftovers are not
        // rescanned.
        assert_eq!(remove_bold("****inner****"), "inner");
    }

    #[test]
    fn links_keep_text() {
        assert_eq!(remove_links("see [docs](https://x.y)"), "see docs");
        assert_eq!(remove_links("[](url)"), "");
    }

    #[test]
    fn images_discard_alt() {
        assert_eq!(remove_images("before ![alt](img.png) after"), "before  after");
    }

    #[test]
    fn image_not_matched_by_link_rule_text() {
        // Link removal on an image leaves the leading bang with alt text;
        // the pipeline orders bold/link/image removal so callers enabling
        // both get the image dropped first.
        assert_eq!(remove_links("![alt](img.png)"), "!alt");
    }

    #[test]
    fn strikethrough_removed() {
        assert_eq!(remove_strikethrough("~~gone~~ kept"), "gone kept");
    }

    #[test]
    fn bold_spacing_inserts_after_symbol() {
        assert_eq!(fix_bold_spacing("**Note:**text"), "**Note:** text");
    }

    #[test]
    fn bold_spacing_skips_alphanumeric_content() {
        assert_eq!(fix_bold_spacing("**Note**text"), "**Note**text");
    }

    #[test]
    fn bold_spacing_skips_existing_whitespace() {
        assert_eq!(fix_bold_spacing("**Note:** text"), "**Note:** text");
        assert_eq!(fix_bold_spacing("**Note:**\ntext"), "**Note:**\ntext");
    }

    #[test]
    fn bold_spacing_at_end_of_input() {
        assert_eq!(fix_bold_spacing("**Note:**"), "**Note:** ");
    }

    #[test]
    fn bold_spacing_is_idempotent() {
        let once = fix_bold_spacing("**a:**b **c:**d **plain**e");
        assert_eq!(fix_bold_spacing(&once), once);
    }

    #[test]
    fn bold_spacing_span_across_lines() {
        assert_eq!(fix_bold_spacing("**a\nb:**c"), "**a\nb:** c");
    }
}
