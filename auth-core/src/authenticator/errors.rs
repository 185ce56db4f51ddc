use crate::password::PasswordError;
use crate::token::TokenError;

/// Authentication operation errors.
///
/// Every rejected credential or token maps to the single
/// `AuthenticationFailed` value; the cause is only recorded in the logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Stored digest is corrupt; a data-integrity fault, not a user error.
    #[error("Malformed password digest: {0}")]
    MalformedDigest(String),

    #[error("Invalid input encoding: {0}")]
    Encoding(String),

    #[error("Token issuance failed: {0}")]
    Issuance(TokenError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PasswordError> for AuthenticationError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::Encoding(message) => AuthenticationError::Encoding(message),
            PasswordError::MalformedDigest(message) => {
                AuthenticationError::MalformedDigest(message)
            }
        }
    }
}
