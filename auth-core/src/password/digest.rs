use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Self-describing one-way digest of a secret.
///
/// Stored by the account owner next to the account; carries algorithm,
/// cost parameters and salt in PHC string form, so verification never needs
/// anything besides the digest itself.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for PasswordDigest {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PasswordDigest {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}
