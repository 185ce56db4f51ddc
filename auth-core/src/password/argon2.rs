use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as HashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::digest::PasswordDigest;
use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Produces salted Argon2id digests in PHC string format. The configured
/// time cost only applies to new hashes; verification always uses the
/// parameters embedded in the stored digest, so digests created under an
/// older cost keep validating.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a password hasher with the library-recommended parameters.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a password hasher with a custom time cost (iteration count).
    ///
    /// Memory and parallelism stay at the library defaults.
    ///
    /// # Errors
    /// Returns the Argon2 parameter error when `time_cost` is out of range.
    pub fn with_time_cost(time_cost: u32) -> Result<Self, argon2::Error> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            time_cost,
            Params::DEFAULT_P_COST,
            None,
        )?;

        Ok(Self { params })
    }

    /// Time cost applied to newly produced digests.
    pub fn time_cost(&self) -> u32 {
        self.params.t_cost()
    }

    /// Hash a plaintext secret with a fresh random salt.
    ///
    /// # Arguments
    /// * `secret` - Plaintext secret to hash
    ///
    /// # Returns
    /// PHC string digest (algorithm, parameters, salt and hash output)
    ///
    /// # Errors
    /// * `Encoding` - The secret was rejected as hash input
    pub fn hash(&self, secret: &str) -> Result<PasswordDigest, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| PasswordDigest::from(hash.to_string()))
            .map_err(|e| PasswordError::Encoding(e.to_string()))
    }

    /// Hash a secret received as raw bytes.
    ///
    /// # Errors
    /// * `Encoding` - The bytes are not valid UTF-8 or were rejected as hash input
    pub fn hash_bytes(&self, secret: &[u8]) -> Result<PasswordDigest, PasswordError> {
        let secret =
            std::str::from_utf8(secret).map_err(|e| PasswordError::Encoding(e.to_string()))?;

        self.hash(secret)
    }

    /// Verify a secret against a stored digest.
    ///
    /// The comparison of hash outputs is constant-time.
    ///
    /// # Arguments
    /// * `secret` - Plaintext secret to verify
    /// * `digest` - Stored digest in PHC string format
    ///
    /// # Returns
    /// True if the secret matches, false otherwise
    ///
    /// # Errors
    /// * `MalformedDigest` - The digest is not an Argon2id PHC string
    pub fn verify(&self, secret: &str, digest: &PasswordDigest) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(digest.as_str())
            .map_err(|e| PasswordError::MalformedDigest(e.to_string()))?;

        if parsed.algorithm != Algorithm::Argon2id.ident() {
            return Err(PasswordError::MalformedDigest(format!(
                "unsupported algorithm {}",
                parsed.algorithm
            )));
        }

        if parsed.salt.is_none() || parsed.hash.is_none() {
            return Err(PasswordError::MalformedDigest(
                "digest carries no salt or hash output".to_string(),
            ));
        }

        match Argon2::default().verify_password(secret.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::MalformedDigest(e.to_string())),
        }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
