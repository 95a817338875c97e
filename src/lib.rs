//! # marktidy
//!
//! Deterministic cleanup pipeline for Markdown-like text.
//!
//! ## Why this crate?
//!
//! Markdown that has been pasted between tools, exported from editors, or
//! generated by models accumulates small structural problems — blank lines
//! splitting every list, bold markers glued to the following word, stale
//! heading numbers, formatting the destination cannot render. Instead of
//! parsing to an AST, this crate applies a pipeline of cheap, composable
//! line-level transforms that fix exactly what was asked and nothing else,
//! never rewriting inside fenced code blocks.
//!
//! ## Pipeline Overview
//!
//! ```text
//! text
//!  │
//!  ├─ 1. Extract   optional heading-only selection
//!  ├─ 2. Lists     collapse blank lines between list items
//!  ├─ 3. Inline    strip bold/link/image/strikethrough, repair bold spacing
//!  ├─ 4. Rules     remove horizontal-rule lines
//!  ├─ 5. Headings  shift levels, number hierarchically
//!  ├─ 6. Select    drop plain-text lines
//!  └─ 7. Clear     full formatting removal (destructive, last)
//! ```
//!
//! The order is fixed; [`TidyOptions`] only chooses which stages run.
//!
//! ## Quick Start
//!
//! ```rust
//! use marktidy::{transform, TidyOptions};
//!
//! let options = TidyOptions::builder()
//!     .number_headings(true)
//!     .build()?;
//! let tidy = transform("# Title\n## Intro\n## Usage", &options);
//! assert_eq!(tidy, "# Title\n## 1. Intro\n## 2. Usage");
//! # Ok::<(), marktidy::MarkTidyError>(())
//! ```
//!
//! ## Guarantees
//!
//! - `transform` is a pure function: same input and options, same output,
//!   no state across invocations.
//! - With every stage disabled the output equals the input byte-for-byte.
//! - No input is an error: unterminated fences, seven-hash headings, and
//!   malformed markup fall back to defined pass-through rules.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `marktidy` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! marktidy = { version = "0.2", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod error;
pub mod options;
pub mod pipeline;
pub mod tidy;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use error::MarkTidyError;
pub use options::{TidyOptions, TidyOptionsBuilder, MAX_HEADING_SHIFT};
pub use tidy::{transform, transform_file, transform_with_stats, TidyOutput, TidyStats};
