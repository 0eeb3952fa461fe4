//! Error type for the outer surfaces (CLI, file loading, server)
//!
//! The scoring and aura engines never fail; only I/O and strict parsing do.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the pure engines
#[derive(Debug, Error)]
pub enum AuraMatchError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown personality type: {0}")]
    InvalidPersonality(String),

    #[error("Unknown attachment style: {0}")]
    InvalidAttachment(String),

    #[error("Unknown swipe direction: {0} (expected left, right or super)")]
    InvalidDirection(String),

    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AuraMatchError>;
