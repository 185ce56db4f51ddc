use std::sync::Arc;
use std::sync::OnceLock;

use crate::account::Account;
use crate::account::AccountLookup;
use crate::password::PasswordDigest;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::AccessToken;
use crate::token::TokenCodec;

use super::errors::AuthenticationError;

/// Secret behind the digest verified when no account matches.
const UNKNOWN_ACCOUNT_SECRET: &str = "unknown-account-placeholder";

/// Turns a presented credential into a signed token.
///
/// Coordinates the account lookup, password verification and token
/// issuance. The only state is a placeholder digest written once; one
/// instance serves any number of concurrent logins.
///
/// A login for an unknown identifier still runs one full password
/// verification against that placeholder digest, so it takes as long as a
/// wrong password for an existing account.
pub struct CredentialAuthenticator {
    password_hasher: PasswordHasher,
    token_codec: Arc<TokenCodec>,
    unknown_account_digest: OnceLock<PasswordDigest>,
}

impl CredentialAuthenticator {
    /// Create a new credential authenticator.
    ///
    /// # Arguments
    /// * `password_hasher` - Hasher used for verification and new digests
    /// * `token_codec` - Codec shared with the token authenticator
    pub fn new(password_hasher: PasswordHasher, token_codec: Arc<TokenCodec>) -> Self {
        Self {
            password_hasher,
            token_codec,
            unknown_account_digest: OnceLock::new(),
        }
    }

    /// Hash a password for storage by the account owner.
    ///
    /// # Errors
    /// * `PasswordError` - The secret was rejected as hash input
    pub fn hash_password(&self, secret: &str) -> Result<PasswordDigest, PasswordError> {
        self.password_hasher.hash(secret)
    }

    /// Verify credentials and issue a token for the account.
    ///
    /// # Arguments
    /// * `identifier` - Login identifier
    /// * `secret` - Plaintext password to verify
    /// * `lookup` - Read-only account lookup
    ///
    /// # Returns
    /// Bearer access token for the account's stable identifier
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown identifier, wrong password or failed lookup
    /// * `MalformedDigest` - The stored digest is corrupt
    /// * `Issuance` - Token generation failed
    pub async fn authenticate<L>(
        &self,
        identifier: &str,
        secret: &str,
        lookup: &L,
    ) -> Result<AccessToken, AuthenticationError>
    where
        L: AccountLookup,
    {
        let account = match lookup.find_by_identifier(identifier).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                self.verify_unknown_account(secret).await;
                tracing::debug!(reason = "unknown_identifier", "Authentication failed");
                return Err(AuthenticationError::AuthenticationFailed);
            }
            Err(e) => {
                self.verify_unknown_account(secret).await;
                tracing::warn!(reason = "lookup_failed", error = %e, "Authentication failed");
                return Err(AuthenticationError::AuthenticationFailed);
            }
        };

        let is_valid = self
            .verify_password(secret, account.password_digest())
            .await
            .map_err(|e| {
                tracing::error!(
                    account_id = %account.id(),
                    error = %e,
                    "Password verification failed"
                );
                e
            })?;

        if !is_valid {
            tracing::debug!(reason = "wrong_secret", "Authentication failed");
            return Err(AuthenticationError::AuthenticationFailed);
        }

        let access_token = self.token_codec.issue(account.id()).map_err(|e| {
            tracing::error!(account_id = %account.id(), error = %e, "Token issuance failed");
            AuthenticationError::Issuance(e)
        })?;

        tracing::debug!(account_id = %account.id(), "Credential authenticated");

        Ok(AccessToken::bearer(
            access_token,
            self.token_codec.ttl().num_seconds(),
        ))
    }

    /// Verify `secret` against the placeholder digest and discard the result.
    async fn verify_unknown_account(&self, secret: &str) {
        let digest = match self.unknown_account_digest.get() {
            Some(digest) => digest.clone(),
            None => {
                let hasher = self.password_hasher.clone();
                let hashed = tokio::task::spawn_blocking(move || hasher.hash(UNKNOWN_ACCOUNT_SECRET))
                    .await
                    .map_err(|e| e.to_string())
                    .and_then(|result| result.map_err(|e| e.to_string()));

                match hashed {
                    Ok(digest) => self.unknown_account_digest.get_or_init(|| digest).clone(),
                    Err(e) => {
                        tracing::error!(error = %e, "Placeholder digest could not be built");
                        return;
                    }
                }
            }
        };

        let _ = self.verify_password(secret, &digest).await;
    }

    /// Argon2 verification, run on the blocking pool.
    async fn verify_password(
        &self,
        secret: &str,
        digest: &PasswordDigest,
    ) -> Result<bool, AuthenticationError> {
        let hasher = self.password_hasher.clone();
        let secret = secret.to_string();
        let digest = digest.clone();

        let verified = tokio::task::spawn_blocking(move || hasher.verify(&secret, &digest))
            .await
            .map_err(|e| AuthenticationError::Internal(e.to_string()))??;

        Ok(verified)
    }
}
