use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity assertion carried inside a signed token.
///
/// Closed record: exactly a subject and an expiry. Tokens whose payload holds
/// any other field are rejected on decode, so nothing beyond these two values
/// crosses the trust boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityClaim {
    /// Stable account identifier
    #[serde(rename = "sub")]
    pub subject: String,

    /// Expiration time (Unix timestamp, whole seconds)
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

impl IdentityClaim {
    pub fn new(subject: impl ToString, expires_at: DateTime<Utc>) -> Self {
        Self {
            subject: subject.to_string(),
            expires_at,
        }
    }

    /// A claim is expired from its expiry instant onwards.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
