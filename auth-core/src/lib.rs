//! Authentication core
//!
//! Turns a presented credential into a verified identity and a presented
//! token back into the account it was issued for:
//! - Password hashing (Argon2id, self-describing PHC digests)
//! - Signed, time-bounded identity tokens (HS256 JWT, `sub` + `exp` only)
//! - Credential and token authenticators over a caller-supplied account lookup
//!
//! Every rejected credential or token surfaces as the same
//! `AuthenticationFailed` error; the cause is only logged.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth_core::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest).unwrap());
//! assert!(!hasher.verify("not_my_password", &digest).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth_core::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::days(7));
//! let token = codec.issue("3f9a2b64-account").unwrap();
//! let claim = codec.validate(&token).unwrap();
//! assert_eq!(claim.subject, "3f9a2b64-account");
//! ```

pub mod account;
pub mod authenticator;
pub mod config;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use account::Account;
pub use account::AccountLookup;
pub use account::LookupError;
pub use authenticator::AuthenticationError;
pub use authenticator::CredentialAuthenticator;
pub use authenticator::TokenAuthenticator;
pub use self::config::AuthConfig;
pub use password::PasswordDigest;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::bearer_token;
pub use token::AccessToken;
pub use token::Clock;
pub use token::IdentityClaim;
pub use token::SignedToken;
pub use token::SystemClock;
pub use token::TokenCodec;
pub use token::TokenError;
