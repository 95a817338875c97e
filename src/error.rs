//! Error types for the marktidy library.
//!
//! The pipeline itself has no failure mode: malformed markup, unterminated
//! fences, and seven-hash headings all fall back to defined pass-through
//! rules, so [`crate::transform`] is infallible. Errors exist only at the
//! edges: validating an option set and moving text in and out of files.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the marktidy library.
#[derive(Debug, Error)]
pub enum MarkTidyError {
    /// Builder validation failed (e.g. heading shift out of range).
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Could not read the input file.
    #[error("Failed to read input file '{}': {source}", path.display())]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not create or write the output file.
    #[error("Failed to write output file '{}': {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_options_display() {
        let e = MarkTidyError::InvalidOptions("heading_shift must be -3..=3, got 9".into());
        assert!(e.to_string().contains("heading_shift"));
    }

    #[test]
    fn write_error_carries_path() {
        let e = MarkTidyError::OutputWriteFailed {
            path: PathBuf::from("/tmp/out.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("/tmp/out.md"));
    }
}
