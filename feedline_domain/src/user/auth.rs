///
/// Opaque credential attached to authenticated requests as `Authorization: Bearer <token>`.
///
/// Warning: Debug output is redacted, the token must not end up in logs.
///
#[derive(Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    /// Parse a token as typed by a user or read from storage. Blank input is no token.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let token = match token.strip_prefix("Bearer") {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
            _ => token,
        };
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(..)")
    }
}
