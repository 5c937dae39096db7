//! Failures that end a run.
//!
//! Problems with individual image references never surface here; they are reported as warnings
//! and counted as skipped by the inliner.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error raised by [`crate::Inliner::run`].
#[derive(Debug, Error)]
pub enum PackError {
    /// The input document does not exist.
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        /// Input document path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The output document or report could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The HTML rewriter aborted the pass.
    #[error("HTML rewrite error: {0}")]
    Rewrite(String),
}

impl PackError {
    /// Process exit status for this failure; `1` is reserved for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            PackError::InputNotFound(_) => 2,
            PackError::ReadInput { .. } | PackError::WriteOutput { .. } => 3,
            PackError::Rewrite(_) => 4,
        }
    }
}
