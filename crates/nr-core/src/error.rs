//! Error types for NeonReels

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum NrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid site data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

/// Result type alias
pub type NrResult<T> = Result<T, NrError>;
