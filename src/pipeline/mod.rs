//! Pipeline stages for Markdown cleanup.
//!
//! Each submodule implements one family of transforms. Every stage is a
//! pure `&str → String` function with no shared state; the orchestrator in
//! [`crate::tidy`] sequences the enabled ones in a fixed order. Keeping
//! stages separate makes each independently testable and lets every stage
//! re-derive line classification from the shared rules in [`line`] instead
//! of trusting a cached parse.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ lists ──▶ inline ──▶ headings ──▶ clear
//! (text)  (selection) (blanks)  (spans)    (shift/number) (strip all)
//! ```
//!
//! 1. [`line`]     — line classifier and code-fence tracker (the leaf
//!    everything else agrees with)
//! 2. [`extract`]  — heading-only extraction, plain-text removal,
//!    horizontal-rule removal
//! 3. [`lists`]    — blank-line collapsing between list items
//! 4. [`inline`]   — bold/link/image/strikethrough stripping and
//!    bold-spacing repair
//! 5. [`headings`] — heading-level shifting and hierarchical numbering
//! 6. [`clear`]    — full formatting clear, the destructive final stage

pub mod clear;
pub mod extract;
pub mod headings;
pub mod inline;
pub mod line;
pub mod lists;
