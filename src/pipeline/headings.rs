//! Heading-level shifting and hierarchical heading numbering.
//!
//! Both stages rewrite only well-formed headings (hashes at column 0, see
//! [`crate::pipeline::line::parse_heading`]) and leave everything inside
//! fenced code blocks untouched. The whitespace the author put between the
//! hashes and the content survives every rewrite.

use crate::pipeline::line::{parse_heading, FenceTracker};

/// Lowest heading level.
const MIN_LEVEL: usize = 1;
/// Highest standard heading level. More than six hashes is a non-standard
/// heading and passes through unchanged.
const MAX_LEVEL: usize = 6;

/// Shift every heading by `shift` levels, one step at a time.
///
/// Each step moves headings one level toward the sign of `shift` and clamps
/// at [1, 6] independently: a level-6 heading shifted down twice stays at 6
/// after the first step and only then could move — it never becomes a
/// phantom level 7. Applying the step `|shift|` times (rather than adding
/// `shift` directly) makes that intermediate clamping observable, which is
/// the contract.
pub fn shift_headings(text: &str, shift: i8) -> String {
    if shift == 0 {
        return text.to_string();
    }
    let deeper = shift > 0;
    let mut out = text.to_string();
    for _ in 0..shift.unsigned_abs() {
        out = shift_one_step(&out, deeper);
    }
    out
}

fn shift_one_step(text: &str, deeper: bool) -> String {
    let mut fence = FenceTracker::new();
    let new_lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            if fence.observe(line) {
                return line.to_string();
            }
            let Some(h) = parse_heading(line) else {
                return line.to_string();
            };
            let level = if deeper && h.level < MAX_LEVEL {
                h.level + 1
            } else if !deeper && h.level > MIN_LEVEL {
                h.level - 1
            } else {
                return line.to_string();
            };
            format!("{}{}{}", "#".repeat(level), h.space, h.content)
        })
        .collect();
    new_lines.join("\n")
}

/// Assign hierarchical dotted numbers (`1.`, `1.1.`, `2.` …) to headings of
/// level 2–6.
///
/// Level-1 headings are left as-is and reset all counters — a new top-level
/// section restarts sub-numbering. For a heading at level L the counters of
/// every deeper level are zeroed, the level-L counter is incremented, and
/// the number string is the dot-joined non-zero counters from level 2 up to
/// L (zeros from skipped intermediate levels are omitted rather than
/// printed as `0`), followed by a trailing dot and one space.
///
/// Any pre-existing `N.N.…` prefix on the content is stripped first, so
/// running the stage twice yields the same output as running it once.
pub fn number_headings(text: &str) -> String {
    // Index 0 tracks level 2 … index 4 tracks level 6.
    let mut counters = [0u32; MAX_LEVEL - 1];
    let mut fence = FenceTracker::new();

    let new_lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            if fence.observe(line) {
                return line.to_string();
            }
            let Some(h) = parse_heading(line) else {
                return line.to_string();
            };

            if h.level == 1 {
                counters = [0; MAX_LEVEL - 1];
                return line.to_string();
            }
            if h.level > MAX_LEVEL {
                return line.to_string();
            }

            // Zero the deeper levels, then bump this one.
            for c in counters.iter_mut().skip(h.level - 1) {
                *c = 0;
            }
            counters[h.level - 2] += 1;

            let number: Vec<String> = counters[..h.level - 1]
                .iter()
                .filter(|&&c| c > 0)
                .map(|c| c.to_string())
                .collect();
            let content = strip_number_prefix(h.content.trim());
            format!(
                "{}{}{}. {}",
                "#".repeat(h.level),
                h.space,
                number.join("."),
                content
            )
        })
        .collect();
    new_lines.join("\n")
}

/// Drop a leading `12.` / `1.2.3.` sequence plus the whitespace after it.
fn strip_number_prefix(content: &str) -> &str {
    let bytes = content.as_bytes();
    let mut pos = 0;
    loop {
        let digits = bytes[pos..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 || bytes.get(pos + digits) != Some(&b'.') {
            break;
        }
        pos += digits + 1;
    }
    if pos == 0 {
        return content;
    }
    content[pos..].trim_start()
}
