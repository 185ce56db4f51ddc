use std::env;
use std::fmt;
use std::sync::Arc;

use argon2::Params;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::password::PasswordHasher;
use crate::token::TokenCodec;

/// Minimum signing key length for HS256.
pub const MIN_SIGNING_KEY_LEN: usize = 32;

/// Default token lifetime: 7 days.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 7 * 24;

/// Longest accepted token lifetime: 366 days.
pub const MAX_TOKEN_TTL_HOURS: i64 = 366 * 24;

/// Authentication core configuration.
///
/// Read once at startup; the signing key must not change while issued tokens
/// are outstanding.
#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    pub signing_key: String,

    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,

    /// Argon2 time cost for new password digests
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

fn default_token_ttl_hours() -> i64 {
    DEFAULT_TOKEN_TTL_HOURS
}

fn default_hash_cost() -> u32 {
    Params::DEFAULT_T_COST
}

impl AuthConfig {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SIGNING_KEY, AUTH__TOKEN_TTL_HOURS, AUTH__HASH_COST)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("AUTH").separator("__"))
            .build()?;

        Self::from_source(configuration)
    }

    /// Deserialize and validate an already assembled configuration.
    ///
    /// # Errors
    /// * `ConfigError::Message` - Short signing key, ttl outside
    ///   1..=`MAX_TOKEN_TTL_HOURS` or unusable hash cost
    pub fn from_source(configuration: ConfigBuilder) -> Result<Self, ConfigError> {
        let config: AuthConfig = configuration.try_deserialize()?;
        config.validate()?;

        tracing::info!(
            token_ttl_hours = config.token_ttl_hours,
            hash_cost = config.hash_cost,
            "Authentication configuration loaded"
        );

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.signing_key.len() < MIN_SIGNING_KEY_LEN {
            return Err(ConfigError::Message(format!(
                "signing_key must be at least {} bytes",
                MIN_SIGNING_KEY_LEN
            )));
        }

        if self.token_ttl_hours <= 0 || self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(ConfigError::Message(format!(
                "token_ttl_hours must be between 1 and {}",
                MAX_TOKEN_TTL_HOURS
            )));
        }

        PasswordHasher::with_time_cost(self.hash_cost)
            .map_err(|e| ConfigError::Message(format!("hash_cost is invalid: {}", e)))?;

        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::hours(self.token_ttl_hours)
    }

    /// Build the password hasher for new digests.
    pub fn password_hasher(&self) -> Result<PasswordHasher, ConfigError> {
        PasswordHasher::with_time_cost(self.hash_cost)
            .map_err(|e| ConfigError::Message(format!("hash_cost is invalid: {}", e)))
    }

    /// Build the process-wide token codec, to be shared by both authenticators.
    pub fn token_codec(&self) -> Arc<TokenCodec> {
        Arc::new(TokenCodec::new(
            self.signing_key.as_bytes(),
            self.token_ttl(),
        ))
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("signing_key", &"<redacted>")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}
