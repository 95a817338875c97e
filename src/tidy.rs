//! Pipeline orchestration: the `transform` entry points.
//!
//! ## Why a fixed stage order?
//!
//! When several toggles are enabled, later stages see earlier stages'
//! output, so the order is part of the contract: numbering runs after
//! shifting so numbers reflect final levels, and the full formatting clear
//! runs last because it is the most destructive and supersedes the finer
//! toggles. Callers cannot reorder stages — they can only switch them on
//! and off.

use crate::error::MarkTidyError;
use crate::options::TidyOptions;
use crate::pipeline::{clear, extract, headings, inline, lists};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Counters describing one pipeline invocation.
///
/// Purely informational — the CLI prints them as a summary line and embeds
/// them in `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct TidyStats {
    /// Line count of the input (split on `\n`).
    pub input_lines: usize,
    /// Line count of the output.
    pub output_lines: usize,
    /// Byte length of the input.
    pub input_bytes: usize,
    /// Byte length of the output.
    pub output_bytes: usize,
    /// Number of stages that ran (enabled toggles, shift counted once).
    pub stages_applied: usize,
    /// Wall-clock time of the invocation.
    pub duration_ms: u64,
}

/// Transformed text plus its invocation counters.
#[derive(Debug, Clone, Serialize)]
pub struct TidyOutput {
    pub text: String,
    pub stats: TidyStats,
}

/// Apply the enabled cleanup stages to `input`.
///
/// This is the primary entry point: a pure function of the input text and
/// the option set, with no state carried across invocations. Empty or
/// whitespace-only input short-circuits to an unchanged result without
/// running any stage, and an option set with every stage disabled returns
/// the input byte-for-byte.
///
/// # Example
/// ```rust
/// use marktidy::{transform, TidyOptions};
///
/// let options = TidyOptions::builder().number_headings(true).build().unwrap();
/// let out = transform("# A\n## B\n## C", &options);
/// assert_eq!(out, "# A\n## 1. B\n## 2. C");
/// ```
pub fn transform(input: &str, options: &TidyOptions) -> String {
    if input.trim().is_empty() {
        return input.to_string();
    }

    let mut text = input.to_string();
    let mut stage = |name: &str, enabled: bool, f: &dyn Fn(&str) -> String| {
        if enabled {
            debug!(stage = name, "applying stage");
            text = f(&text);
        }
    };

    stage("extract_headings", options.extract_headings_only, &extract::extract_headings);
    stage("collapse_list_blanks", options.collapse_list_blanks, &lists::collapse_list_blanks);
    stage("remove_bold", options.remove_bold, &inline::remove_bold);
    stage("remove_links", options.remove_links, &inline::remove_links);
    stage("remove_images", options.remove_images, &inline::remove_images);
    stage(
        "remove_strikethrough",
        options.remove_strikethrough,
        &inline::remove_strikethrough,
    );
    stage("fix_bold_spacing", options.fix_bold_spacing, &inline::fix_bold_spacing);
    stage(
        "remove_horizontal_rules",
        options.remove_horizontal_rules,
        &extract::remove_horizontal_rules,
    );
    stage("shift_headings", options.heading_shift != 0, &|t| {
        headings::shift_headings(t, options.heading_shift)
    });
    stage("remove_plain_text", options.remove_plain_text, &extract::remove_plain_text);
    stage("number_headings", options.number_headings, &headings::number_headings);
    stage("clear_formatting", options.clear_formatting, &clear::clear_formatting);

    text
}

/// Like [`transform`], additionally reporting [`TidyStats`].
pub fn transform_with_stats(input: &str, options: &TidyOptions) -> TidyOutput {
    let start = Instant::now();
    let text = transform(input, options);
    let stats = TidyStats {
        input_lines: input.split('\n').count(),
        output_lines: text.split('\n').count(),
        input_bytes: input.len(),
        output_bytes: text.len(),
        stages_applied: enabled_stage_count(options),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        input_lines = stats.input_lines,
        output_lines = stats.output_lines,
        stages = stats.stages_applied,
        "transform complete"
    );
    TidyOutput { text, stats }
}

/// Read `input_path`, transform, and write the result to `output_path`.
///
/// Uses an atomic write (temp file + rename) to prevent partial output
/// files.
pub fn transform_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    options: &TidyOptions,
) -> Result<TidyStats, MarkTidyError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let input = std::fs::read_to_string(input_path).map_err(|e| MarkTidyError::InputReadFailed {
        path: input_path.to_path_buf(),
        source: e,
    })?;

    let output = transform_with_stats(&input, options);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MarkTidyError::OutputWriteFailed {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let tmp_path = output_path.with_extension("md.tmp");
    std::fs::write(&tmp_path, &output.text).map_err(|e| MarkTidyError::OutputWriteFailed {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, output_path).map_err(|e| MarkTidyError::OutputWriteFailed {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(output.stats)
}

fn enabled_stage_count(options: &TidyOptions) -> usize {
    [
        options.extract_headings_only,
        options.collapse_list_blanks,
        options.remove_bold,
        options.remove_links,
        options.remove_images,
        options.remove_strikethrough,
        options.fix_bold_spacing,
        options.remove_horizontal_rules,
        options.heading_shift != 0,
        options.remove_plain_text,
        options.number_headings,
        options.clear_formatting,
    ]
    .iter()
    .filter(|&&on| on)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_when_all_disabled() {
        let input = "# H\n\n- a\n\n- b\n**x:**y\n---\n";
        assert_eq!(transform(input, &TidyOptions::all_disabled()), input);
    }

    #[test]
    fn empty_input_short_circuits() {
        let options = TidyOptions::default();
        assert_eq!(transform("", &options), "");
        assert_eq!(transform("   \n  ", &options), "   \n  ");
    }

    #[test]
    fn numbering_runs_after_shift() {
        // Shift H1 → H2 first, then number: the number must reflect the
        // shifted level.
        let options = TidyOptions::builder()
            .heading_shift(1)
            .number_headings(true)
            .build()
            .unwrap();
        assert_eq!(transform("# A\n# B", &options), "## 1. A\n## 2. B");
    }

    #[test]
    fn clear_formatting_supersedes_finer_toggles() {
        let options = TidyOptions::builder()
            .remove_bold(true)
            .clear_formatting(true)
            .build()
            .unwrap();
        assert_eq!(transform("# T\n**b** _i_", &options), "T\nb i");
    }

    #[test]
    fn default_options_pipeline() {
        // collapse + remove images + bold spacing, in pipeline order.
        let input = "- a\n\n- b\n![img](x.png)\n**Note:**text";
        let out = transform(input, &TidyOptions::default());
        assert_eq!(out, "- a\n- b\n\n**Note:** text");
    }

    #[test]
    fn stats_count_lines_and_stages() {
        let options = TidyOptions::builder()
            .extract_headings_only(true)
            .collapse_list_blanks(false)
            .remove_images(false)
            .fix_bold_spacing(false)
            .build()
            .unwrap();
        let out = transform_with_stats("# A\ntext\n# B", &options);
        assert_eq!(out.text, "# A\n# B");
        assert_eq!(out.stats.input_lines, 3);
        assert_eq!(out.stats.output_lines, 2);
        assert_eq!(out.stats.stages_applied, 1);
    }
}
