//! Library error types.
//!
//! Only genuinely fatal conditions live here: missing credential, corpus
//! I/O, config parsing, and the sampling precondition. Transport failures
//! from the oracle are recoverable by contract and surface as `None` from
//! [`crate::providers::Oracle`] calls, never as errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RotbenchError {
    #[error("ANTHROPIC_API_KEY not found in environment variables")]
    MissingApiKey,

    /// Requesting more samples than the corpus holds would silently shrink
    /// the score's denominator, so it halts the run instead.
    #[error(
        "corpus has {available} phrases but {requested} samples were requested for strength {strength}"
    )]
    CorpusTooSmall {
        strength: i32,
        requested: usize,
        available: usize,
    },

    #[error("failed to {action} corpus file {path}: {source}")]
    CorpusIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
