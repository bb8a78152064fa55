//! Authentication via the admin bearer token.
//!
//! ## Security Model
//!
//! - The admin token is issued out of band (the dashboard login) and handed to
//!   the SDK through the builder, the environment, or `client.auth().use_token()`.
//! - The SDK stores it privately in the HTTP layer and injects it as
//!   `Authorization: Bearer <token>` on every request.
//! - It is never exposed through the public API and never printed: the
//!   [`AdminToken`] `Debug` impl is redacted.
//! - Mutations refuse to run without a token; reads are attempted anyway since
//!   several listing endpoints are public.
//! - There is no refresh flow. A `401` surfaces as `HttpError::Unauthorized`
//!   and the caller must supply a new token.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// An admin bearer token. Construction normalises and validates it.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminToken(String);

impl AdminToken {
    /// Accepts a raw token or a full `Bearer <token>` header value.
    pub fn new(raw: &str) -> Result<Self, AuthError> {
        let trimmed = raw.trim();
        let without_scheme = match trimmed.get(..6) {
            Some(scheme)
                if scheme.eq_ignore_ascii_case("bearer")
                    && trimmed[6..].chars().next().map_or(true, char::is_whitespace) =>
            {
                &trimmed[6..]
            }
            _ => trimmed,
        };
        let token = without_scheme.trim().trim_matches('"');
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }
        Ok(Self(token.to_string()))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AdminToken(***)")
    }
}

/// Public view of the session. Does not carry the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCredentials {
    /// When the token was handed to this client.
    pub since: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_normalisation() {
        assert_eq!(AdminToken::new("abc").unwrap().expose(), "abc");
        assert_eq!(AdminToken::new("  Bearer abc ").unwrap().expose(), "abc");
        assert_eq!(AdminToken::new("\"abc\"").unwrap().expose(), "abc");
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(AdminToken::new("   "), Err(AuthError::EmptyToken)));
        assert!(matches!(AdminToken::new("Bearer "), Err(AuthError::EmptyToken)));
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = AdminToken::new("super-secret").unwrap();
        assert_eq!(format!("{:?}", token), "AdminToken(***)");
    }
}
