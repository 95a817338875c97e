//! Option set selecting which pipeline stages run.
//!
//! All cleanup behaviour is controlled through [`TidyOptions`], an immutable
//! record handed to [`crate::transform`] once per invocation. Keeping every
//! toggle in one struct makes it trivial to serialise an option set for
//! logging or a `--json` report and to diff two runs to understand why
//! their outputs differ.
//!
//! # Design choice: explicit options over ambient state
//! The pipeline never reads configuration from anywhere else — no globals,
//! no environment. A host that re-runs the pipeline on every toggle change
//! passes a fresh `TidyOptions` each time; two concurrent invocations with
//! different option sets cannot interfere.

use crate::error::MarkTidyError;
use serde::{Deserialize, Serialize};

/// Largest heading-shift magnitude in either direction.
pub const MAX_HEADING_SHIFT: i8 = 3;

/// Stage toggles for one pipeline invocation.
///
/// `Default` mirrors the defaults the interactive host historically shipped
/// with: list-blank collapsing, image removal, and bold-spacing repair on,
/// everything else off. Use [`TidyOptions::all_disabled`] for the identity
/// configuration.
///
/// # Example
/// ```rust
/// use marktidy::TidyOptions;
///
/// let options = TidyOptions::builder()
///     .number_headings(true)
///     .heading_shift(1)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TidyOptions {
    /// Strip all formatting (headings, lists, inline markers, rules),
    /// keeping the readable text. Applied last; largely subsumes the finer
    /// toggles below.
    pub clear_formatting: bool,

    /// Remove blank lines sandwiched between two list items. Default: on.
    pub collapse_list_blanks: bool,

    /// Replace `[text](url)` with `text`.
    pub remove_links: bool,

    /// Remove `![alt](url)` entirely, alt text included. Default: on.
    pub remove_images: bool,

    /// Replace `**text**` with `text`.
    pub remove_bold: bool,

    /// Insert a space after a bold span abutting the following text.
    /// Default: on.
    pub fix_bold_spacing: bool,

    /// Replace `~~text~~` with `text`.
    pub remove_strikethrough: bool,

    /// Delete horizontal-rule lines.
    pub remove_horizontal_rules: bool,

    /// Keep only heading lines, discarding everything else.
    pub extract_headings_only: bool,

    /// Keep only structural lines (headings, list items, rules, blanks).
    pub remove_plain_text: bool,

    /// Number level 2–6 headings hierarchically (`1.`, `1.1.`, `2.` …).
    pub number_headings: bool,

    /// Shift heading levels by this many steps, −3..=3, clamped at the
    /// 1–6 range one step at a time. 0 disables the stage.
    pub heading_shift: i8,
}

impl Default for TidyOptions {
    fn default() -> Self {
        Self {
            clear_formatting: false,
            collapse_list_blanks: true,
            remove_links: false,
            remove_images: true,
            remove_bold: false,
            fix_bold_spacing: true,
            remove_strikethrough: false,
            remove_horizontal_rules: false,
            extract_headings_only: false,
            remove_plain_text: false,
            number_headings: false,
            heading_shift: 0,
        }
    }
}

impl TidyOptions {
    /// Create a new builder seeded with the defaults.
    pub fn builder() -> TidyOptionsBuilder {
        TidyOptionsBuilder {
            options: Self::default(),
        }
    }

    /// The identity configuration: every stage off. With this option set
    /// [`crate::transform`] returns its input unchanged.
    pub fn all_disabled() -> Self {
        Self {
            collapse_list_blanks: false,
            remove_images: false,
            fix_bold_spacing: false,
            ..Self::default()
        }
    }

    /// True when no stage would run.
    pub fn is_identity(&self) -> bool {
        *self == Self::all_disabled()
    }

    /// Check the constraints the builder enforces.
    ///
    /// Serde accepts any `i8` for `heading_shift`, so callers that
    /// deserialize an option set from an external source (a `--options`
    /// file, a saved report) must validate it before handing it to the
    /// pipeline.
    pub fn validate(&self) -> Result<(), MarkTidyError> {
        // Range test rather than `abs()`: the magnitude of `i8::MIN` does
        // not fit in an `i8`.
        if !(-MAX_HEADING_SHIFT..=MAX_HEADING_SHIFT).contains(&self.heading_shift) {
            return Err(MarkTidyError::InvalidOptions(format!(
                "heading_shift must be -{MAX_HEADING_SHIFT}..={MAX_HEADING_SHIFT}, got {}",
                self.heading_shift
            )));
        }
        Ok(())
    }
}

/// Builder for [`TidyOptions`].
#[derive(Debug)]
pub struct TidyOptionsBuilder {
    options: TidyOptions,
}

impl TidyOptionsBuilder {
    pub fn clear_formatting(mut self, v: bool) -> Self {
        self.options.clear_formatting = v;
        self
    }

    pub fn collapse_list_blanks(mut self, v: bool) -> Self {
        self.options.collapse_list_blanks = v;
        self
    }

    pub fn remove_links(mut self, v: bool) -> Self {
        self.options.remove_links = v;
        self
    }

    pub fn remove_images(mut self, v: bool) -> Self {
        self.options.remove_images = v;
        self
    }

    pub fn remove_bold(mut self, v: bool) -> Self {
        self.options.remove_bold = v;
        self
    }

    pub fn fix_bold_spacing(mut self, v: bool) -> Self {
        self.options.fix_bold_spacing = v;
        self
    }

    pub fn remove_strikethrough(mut self, v: bool) -> Self {
        self.options.remove_strikethrough = v;
        self
    }

    pub fn remove_horizontal_rules(mut self, v: bool) -> Self {
        self.options.remove_horizontal_rules = v;
        self
    }

    pub fn extract_headings_only(mut self, v: bool) -> Self {
        self.options.extract_headings_only = v;
        self
    }

    pub fn remove_plain_text(mut self, v: bool) -> Self {
        self.options.remove_plain_text = v;
        self
    }

    pub fn number_headings(mut self, v: bool) -> Self {
        self.options.number_headings = v;
        self
    }

    pub fn heading_shift(mut self, shift: i8) -> Self {
        self.options.heading_shift = shift;
        self
    }

    /// Build the option set, validating constraints.
    pub fn build(self) -> Result<TidyOptions, MarkTidyError> {
        self.options.validate()?;
        Ok(self.options)
    }
}
