//! Error types for descriptor ingestion.

use thiserror::Error;

/// Errors raised while reading descriptor documents.
#[derive(Debug, Error)]
pub enum DefineError {
    /// The document is not a valid model descriptor.
    #[error("Failed to parse model descriptor: {0}")]
    Parse(#[from] serde_json::Error),
}
