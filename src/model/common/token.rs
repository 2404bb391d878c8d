use data_encoding::BASE64URL_NOPAD;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Bytes of entropy behind a generated admin token.
const TOKEN_BYTES: usize = 32;

/// The bearer secret authorizing admin operations on one survey. An opaque
/// string as far as clients are concerned; compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminToken(String);

impl AdminToken {
    /// Generate a fresh unguessable token from the thread CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(BASE64URL_NOPAD.encode(&bytes))
    }

    /// Does the presented bearer string match this token?
    pub fn matches(&self, presented: &str) -> bool {
        self.0 == presented
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AdminToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_distinct_and_url_safe() {
        let a = AdminToken::generate();
        let b = AdminToken::generate();
        assert_ne!(a, b);
        assert!(a
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn matching_is_verbatim() {
        let token = AdminToken::from("opaque-bearer".to_string());
        assert!(token.matches("opaque-bearer"));
        assert!(!token.matches("OPAQUE-BEARER"));
        assert!(!token.matches(""));
    }
}
