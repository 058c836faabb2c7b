//! Error types for signature extraction

use thiserror::Error;

/// Faults raised inside the extraction pipeline.
///
/// None of these reach callers of [`crate::extract_signature`], which falls
/// back to returning the body untouched.
#[derive(Error, Debug)]
pub enum SignatureError {
    /// Configuration values that cannot drive the heuristic
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The URL pattern engine gave up on a line
    #[error("URL pattern failed: {0}")]
    UrlPattern(String),

    /// A candidate index does not address any line
    #[error("Line index {index} out of range for {len} lines")]
    LineIndex { index: usize, len: usize },

    /// A cut point does not fall on the text it was computed from
    #[error("Signature boundary does not match the message body")]
    Boundary,
}

/// Result type for signature extraction operations
pub type Result<T> = std::result::Result<T, SignatureError>;
