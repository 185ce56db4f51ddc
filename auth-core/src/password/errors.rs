use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// The secret could not be accepted as hash input.
    #[error("Invalid password encoding: {0}")]
    Encoding(String),

    /// The stored digest was not produced by this hasher.
    #[error("Malformed password digest: {0}")]
    MalformedDigest(String),
}
