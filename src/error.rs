//! Error types for loading pricing inputs.
//!
//! The calculators themselves never fail; only reading input documents does.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the pricing crate.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty input: {path}")]
    EmptyInput { path: PathBuf },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: expected {expected}, got {found}")]
    UnexpectedShape { expected: String, found: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;
