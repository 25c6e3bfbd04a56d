// File: src/error.rs
use std::io;
use thiserror::Error;

/// Failures while reading the index/detail artifacts or the config.
/// Tokenizing and ranking themselves never fail.
#[derive(Debug, Error)]
pub enum RelatedError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
