use thiserror::Error;

/// Error type for token operations.
///
/// The variants are internal diagnostics; at the authentication boundary
/// every validation failure collapses into one generic outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
