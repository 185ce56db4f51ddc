use async_trait::async_trait;
use thiserror::Error;

use crate::password::PasswordDigest;

/// Failure reported by the account lookup collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Account lookup failed: {0}")]
pub struct LookupError(pub String);

/// Stored account as seen by the authentication core.
///
/// Implemented by the caller's own account record; only the stable
/// identifier and the password digest are read.
pub trait Account: Send + Sync + 'static {
    /// Immutable unique key of the account, embedded as token subject.
    fn id(&self) -> &str;

    /// Digest of the account's password.
    fn password_digest(&self) -> &PasswordDigest;
}

/// Read-only account lookup provided by the persistence layer.
#[async_trait]
pub trait AccountLookup: Send + Sync + 'static {
    type Account: Account;

    /// Retrieve an account by the identifier presented at login.
    ///
    /// # Arguments
    /// * `identifier` - Login identifier (e.g. email address)
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `LookupError` - Storage operation failed
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Self::Account>, LookupError>;

    /// Retrieve an account by its stable identifier.
    ///
    /// # Arguments
    /// * `id` - Stable account identifier, as carried in token subjects
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `LookupError` - Storage operation failed
    async fn find_by_id(&self, id: &str) -> Result<Option<Self::Account>, LookupError>;
}
