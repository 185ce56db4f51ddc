#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

use async_trait::async_trait;
use auth_core::token::clock::testing::FixedClock;
use auth_core::Account;
use auth_core::AccountLookup;
use auth_core::AuthConfig;
use auth_core::CredentialAuthenticator;
use auth_core::LookupError;
use auth_core::PasswordDigest;
use auth_core::TokenAuthenticator;
use auth_core::TokenCodec;
use uuid::Uuid;

pub const SIGNING_KEY: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Account record as the persistence layer would hold it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredAccount {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub password_digest: PasswordDigest,
}

impl Account for StoredAccount {
    fn id(&self) -> &str {
        &self.id
    }

    fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }
}

/// In-memory stand-in for the account store.
#[derive(Default)]
pub struct InMemoryAccounts {
    accounts: RwLock<HashMap<String, StoredAccount>>,
}

impl InMemoryAccounts {
    pub fn insert(&self, email: &str, display_name: &str, digest: PasswordDigest) -> StoredAccount {
        let account = StoredAccount {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            display_name: display_name.to_string(),
            password_digest: digest,
        };

        self.accounts
            .write()
            .unwrap()
            .insert(account.id.clone(), account.clone());

        account
    }

    pub fn remove(&self, id: &str) {
        self.accounts.write().unwrap().remove(id);
    }

    pub fn rename(&self, id: &str, display_name: &str, email: &str) {
        if let Some(account) = self.accounts.write().unwrap().get_mut(id) {
            account.display_name = display_name.to_string();
            account.email = email.to_string();
        }
    }
}

#[async_trait]
impl AccountLookup for InMemoryAccounts {
    type Account = StoredAccount;

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<StoredAccount>, LookupError> {
        Ok(self
            .accounts
            .read()
            .unwrap()
            .values()
            .find(|account| account.email == identifier)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<StoredAccount>, LookupError> {
        Ok(self.accounts.read().unwrap().get(id).cloned())
    }
}

/// Lookup whose storage is unreachable.
pub struct UnavailableAccounts;

#[async_trait]
impl AccountLookup for UnavailableAccounts {
    type Account = StoredAccount;

    async fn find_by_identifier(&self, _: &str) -> Result<Option<StoredAccount>, LookupError> {
        Err(LookupError("connection refused".to_string()))
    }

    async fn find_by_id(&self, _: &str) -> Result<Option<StoredAccount>, LookupError> {
        Err(LookupError("connection refused".to_string()))
    }
}

/// Both authenticators wired the way a service would at startup.
pub struct TestAuth {
    pub config: AuthConfig,
    pub codec: Arc<TokenCodec>,
    pub credentials: CredentialAuthenticator,
    pub tokens: TokenAuthenticator,
    pub accounts: InMemoryAccounts,
}

impl TestAuth {
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_clock(clock: FixedClock) -> Self {
        Self::build(Some(clock))
    }

    fn build(clock: Option<FixedClock>) -> Self {
        init_tracing();

        let source = config::Config::builder()
            .set_override("signing_key", SIGNING_KEY)
            .unwrap()
            .set_override("hash_cost", "1")
            .unwrap()
            .build()
            .unwrap();
        let config = AuthConfig::from_source(source).expect("valid test configuration");

        let codec = match clock {
            Some(clock) => Arc::new(
                TokenCodec::new(config.signing_key.as_bytes(), config.token_ttl()).with_clock(clock),
            ),
            None => config.token_codec(),
        };
        let hasher = config.password_hasher().unwrap();

        Self {
            credentials: CredentialAuthenticator::new(hasher, Arc::clone(&codec)),
            tokens: TokenAuthenticator::new(Arc::clone(&codec)),
            accounts: InMemoryAccounts::default(),
            codec,
            config,
        }
    }

    /// Register an account with a freshly hashed password.
    pub fn register(&self, email: &str, password: &str) -> StoredAccount {
        let digest = self.credentials.hash_password(password).unwrap();
        self.accounts.insert(email, "Test User", digest)
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
