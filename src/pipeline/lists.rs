//! Blank-line collapsing inside lists.

use crate::pipeline::line::is_list_item;

/// Remove a blank line only when it sits strictly between two list items.
///
/// Two passes: the first tags every *input* line with its list-item flag,
/// the second drops a blank line iff both its input neighbours are tagged.
/// Checking neighbours against the pre-collapse sequence (not the partially
/// built output) means a dropped blank can never change the classification
/// of the next one, and a blank after the final list item — whose next
/// neighbour is a paragraph or the end of the document — is preserved.
///
/// Lines are split terminator-inclusive: a deleted blank takes its own
/// newline with it and never disturbs the neighbouring lines.
pub fn collapse_list_blanks(text: &str) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let flags: Vec<bool> = lines.iter().map(|l| is_list_item(l)).collect();

    let mut out = String::with_capacity(text.len());
    for (i, line) in lines.iter().enumerate() {
        let prev_is_item = i > 0 && flags[i - 1];
        let next_is_item = i + 1 < lines.len() && flags[i + 1];
        if line.trim().is_empty() && prev_is_item && next_is_item {
            continue;
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_blank_between_items() {
        assert_eq!(collapse_list_blanks("- a\n\n- b"), "- a\n- b");
    }

    #[test]
    fn keeps_blank_after_last_item() {
        let input = "- a\n\n- b\n\nParagraph";
        assert_eq!(collapse_list_blanks(input), "- a\n- b\n\nParagraph");
    }

    #[test]
    fn keeps_blank_before_first_item() {
        let input = "Paragraph\n\n- a\n\n- b";
        assert_eq!(collapse_list_blanks(input), "Paragraph\n\n- a\n- b");
    }

    #[test]
    fn keeps_trailing_blank_at_end_of_document() {
        assert_eq!(collapse_list_blanks("- a\n\n- b\n\n"), "- a\n- b\n\n");
    }

    #[test]
    fn double_blank_between_items_survives() {
        // Each blank's neighbours are checked against the input: the first
        // blank sees another blank below, the second sees one above, so
        // neither is sandwiched between two list items.
        let input = "- a\n\n\n- b";
        assert_eq!(collapse_list_blanks(input), input);
    }

    #[test]
    fn mixed_marker_styles() {
        assert_eq!(
            collapse_list_blanks("* a\n\n1. b\n\n- c"),
            "* a\n1. b\n- c"
        );
    }

    #[test]
    fn untouched_without_lists() {
        let input = "para one\n\npara two";
        assert_eq!(collapse_list_blanks(input), input);
    }
}
