//! Error types for SignBridge configuration and tables
//!
//! Translation itself never fails: malformed landmarks classify as
//! `unknown` and empty text yields an empty sign list. Errors only arise
//! while building the immutable tables and thresholds the core runs on.

use thiserror::Error;

/// Core SignBridge errors
#[derive(Error, Debug)]
pub enum SignBridgeError {
    // Config errors
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid threshold {name}: {value}")]
    InvalidThreshold { name: &'static str, value: f32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Lexicon errors
    #[error("Alphabet key must be a single letter, got {0:?}")]
    InvalidLetter(String),

    #[error("Sequence pattern for {0:?} is empty")]
    EmptyPattern(String),

    #[error("Sequence pattern for {text:?} contains the unknown label")]
    UnknownInPattern { text: String },

    #[error("Lexicon entry {0:?} has an empty glyph")]
    EmptyGlyph(String),

    // Runtime errors
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type for SignBridge operations
pub type SignBridgeResult<T> = Result<T, SignBridgeError>;
