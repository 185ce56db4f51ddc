use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Token type advertised next to issued tokens.
pub const BEARER: &str = "bearer";

/// Opaque bearer credential: encoded claim plus signature.
///
/// Validity depends only on the signature and the embedded expiry; there is
/// no server-side record.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedToken(String);

impl SignedToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for SignedToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SignedToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SignedToken(..)")
    }
}

/// Login response handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    pub access_token: SignedToken,
    pub token_type: &'static str,
    /// Lifetime of the token in seconds
    pub expires_in: i64,
}

impl AccessToken {
    pub fn bearer(access_token: SignedToken, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: BEARER,
            expires_in,
        }
    }
}

/// Extract the token from an `Authorization` header value.
///
/// Accepts `Bearer <token>` with a case-insensitive scheme. Returns `None`
/// for any other scheme or an empty token.
pub fn bearer_token(header_value: &str) -> Option<SignedToken> {
    let (scheme, token) = header_value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    Some(SignedToken::from(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token() {
        let token = bearer_token("Bearer abc.def.ghi").unwrap();
        assert_eq!(token.as_str(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_scheme_case_and_whitespace() {
        assert_eq!(
            bearer_token("  bearer   abc.def.ghi  ").unwrap().as_str(),
            "abc.def.ghi"
        );
        assert_eq!(bearer_token("BEARER abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_bearer_token_rejects_other_forms() {
        assert!(bearer_token("").is_none());
        assert!(bearer_token("Bearer").is_none());
        assert!(bearer_token("Bearer    ").is_none());
        assert!(bearer_token("Basic dXNlcjpwYXNz").is_none());
        assert!(bearer_token("abc.def.ghi").is_none());
        assert!(bearer_token("Bearer abc def").is_none());
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = SignedToken::from("abc.def.ghi");
        assert_eq!(format!("{:?}", token), "SignedToken(..)");
    }

    #[test]
    fn test_access_token_serialization() {
        let response = AccessToken::bearer(SignedToken::from("abc.def.ghi"), 3600);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "access_token": "abc.def.ghi",
                "token_type": "bearer",
                "expires_in": 3600
            })
        );
    }
}
