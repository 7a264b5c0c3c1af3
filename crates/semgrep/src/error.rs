//! Error types for the semgrep crate.

use crate::types::OutputError;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

/// Errors from reading rule configs, running scans, and reading result context.
#[derive(Debug, Error)]
pub enum SemgrepError {
    #[error("failed to list config directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {name}: {source}")]
    ConfigRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {name}: {source}")]
    ConfigParse {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The scanner process could not be started at all.
    #[error("failed to run {bin}: {source}")]
    Launch {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    /// The scanner exited non-zero without reporting structured errors.
    #[error("{bin} {status}")]
    Exit {
        bin: String,
        status: ExitStatus,
        stderr: Vec<u8>,
    },

    /// The scanner ran but reported errors in its JSON output.
    #[error("semgrep errors: {}", summarize(.0))]
    Reported(Vec<OutputError>),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("offset {offset} out of bounds for {} ({len} bytes)", .path.display())]
    OffsetOutOfBounds {
        path: PathBuf,
        offset: usize,
        len: usize,
    },

    #[error("invalid span {start}..{end} in {}", .path.display())]
    InvalidSpan {
        path: PathBuf,
        start: usize,
        end: usize,
    },
}

impl SemgrepError {
    /// Standard error captured from a failed scanner process, if any.
    pub fn stderr(&self) -> Option<&[u8]> {
        match self {
            SemgrepError::Exit { stderr, .. } if !stderr.is_empty() => Some(stderr),
            _ => None,
        }
    }

    /// Attach the offending file to span errors raised before it was known.
    pub(crate) fn with_path(self, file: &Path) -> Self {
        match self {
            SemgrepError::OffsetOutOfBounds { offset, len, .. } => {
                SemgrepError::OffsetOutOfBounds {
                    path: file.to_path_buf(),
                    offset,
                    len,
                }
            }
            SemgrepError::InvalidSpan { start, end, .. } => SemgrepError::InvalidSpan {
                path: file.to_path_buf(),
                start,
                end,
            },
            other => other,
        }
    }
}

fn summarize(errors: &[OutputError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type SemgrepResult<T> = Result<T, SemgrepError>;
