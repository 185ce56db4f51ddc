use std::sync::Arc;

use chrono::Duration;
use chrono::SubsecRound;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::IdentityClaim;
use super::clock::Clock;
use super::clock::SystemClock;
use super::errors::TokenError;
use super::signed::SignedToken;

/// Issues and validates signed, time-bounded identity tokens.
///
/// Tokens are JWTs signed with HS256 (HMAC with SHA-256) under a key fixed at
/// construction. Build one codec at startup and share it (`Arc`) between
/// readers; replacing the key invalidates every outstanding token.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Create a new token codec with a signing key and a token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (at least 32 bytes for HS256)
    /// * `ttl` - Lifetime of every issued token
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let algorithm = Algorithm::HS256;

        let mut validation = Validation::new(algorithm);
        // Expiry is checked against the codec's clock with zero leeway
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
            ttl,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used for issuance and expiry checks.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token asserting `subject` until now + ttl.
    ///
    /// The issuance instant is taken at whole-second precision, so the
    /// token expires exactly `ttl` after it.
    ///
    /// # Arguments
    /// * `subject` - Stable account identifier
    ///
    /// # Errors
    /// * `EncodingFailed` - Empty subject, expiry out of range or token encoding failed
    pub fn issue(&self, subject: &str) -> Result<SignedToken, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::EncodingFailed("empty subject".to_string()));
        }

        let issued_at = self.clock.now().trunc_subsecs(0);
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| TokenError::EncodingFailed("token expiry out of range".to_string()))?;
        let claim = IdentityClaim::new(subject, expires_at);

        encode(&Header::new(self.algorithm), &claim, &self.encoding_key)
            .map(SignedToken::from)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its claim.
    ///
    /// The signature is checked before the expiry, so a tampered token is
    /// reported as such even when it is also expired.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature mismatch, wrong key or foreign algorithm
    /// * `Expired` - The current instant is at or past the claim's expiry
    /// * `Malformed` - The token or its payload cannot be decoded
    pub fn validate(&self, token: &SignedToken) -> Result<IdentityClaim, TokenError> {
        let token_data =
            decode::<IdentityClaim>(token.as_str(), &self.decoding_key, &self.validation)
                .map_err(|e| match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::Malformed(e.to_string()),
                })?;

        let claim = token_data.claims;
        if claim.is_expired(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claim)
    }
}
