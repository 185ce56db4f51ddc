use std::sync::Arc;

use crate::account::AccountLookup;
use crate::token::bearer_token;
use crate::token::SignedToken;
use crate::token::TokenCodec;
use crate::token::TokenError;

use super::errors::AuthenticationError;

/// Resolves a presented token back to the account it was issued for.
///
/// The claim's subject is the only token content trusted, and only as the
/// stable account identifier handed to the lookup.
pub struct TokenAuthenticator {
    token_codec: Arc<TokenCodec>,
}

impl TokenAuthenticator {
    pub fn new(token_codec: Arc<TokenCodec>) -> Self {
        Self { token_codec }
    }

    /// Validate a token and load its account.
    ///
    /// # Arguments
    /// * `token` - Signed token presented by the caller
    /// * `lookup` - Read-only account lookup
    ///
    /// # Returns
    /// The account named by the token's subject
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Invalid, expired or tampered token, deleted
    ///   account, or failed lookup
    pub async fn resolve<L>(
        &self,
        token: &SignedToken,
        lookup: &L,
    ) -> Result<L::Account, AuthenticationError>
    where
        L: AccountLookup,
    {
        let claim = self.token_codec.validate(token).map_err(|e| {
            let reason = match &e {
                TokenError::InvalidSignature => "invalid_signature",
                TokenError::Expired => "expired",
                TokenError::Malformed(_) | TokenError::EncodingFailed(_) => "malformed_token",
            };
            tracing::debug!(reason, error = %e, "Token rejected");
            AuthenticationError::AuthenticationFailed
        })?;

        match lookup.find_by_id(&claim.subject).await {
            Ok(Some(account)) => Ok(account),
            Ok(None) => {
                tracing::warn!(
                    reason = "unknown_subject",
                    account_id = %claim.subject,
                    "Token rejected"
                );
                Err(AuthenticationError::AuthenticationFailed)
            }
            Err(e) => {
                tracing::warn!(reason = "lookup_failed", error = %e, "Token rejected");
                Err(AuthenticationError::AuthenticationFailed)
            }
        }
    }

    /// Resolve straight from an `Authorization` header value.
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Missing or ill-formed bearer value, or any
    ///   failure of [`TokenAuthenticator::resolve`]
    pub async fn resolve_bearer<L>(
        &self,
        header_value: &str,
        lookup: &L,
    ) -> Result<L::Account, AuthenticationError>
    where
        L: AccountLookup,
    {
        let token = bearer_token(header_value).ok_or_else(|| {
            tracing::debug!(reason = "missing_bearer", "Token rejected");
            AuthenticationError::AuthenticationFailed
        })?;

        self.resolve(&token, lookup).await
    }
}
