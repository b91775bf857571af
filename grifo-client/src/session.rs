//! Authenticated session
//!
//! The dashboard receives an opaque JWT at login. Claims are decoded once,
//! here, and every service that needs the authenticated user takes the
//! `Session` explicitly; nothing re-reads or re-decodes stored tokens at
//! call sites.
//!
//! The backend owns signature verification; the client only extracts the
//! subject and checks expiry.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried in the Grifo auth token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username
    #[serde(default)]
    pub username: String,
    /// Expiration timestamp
    pub exp: i64,
}

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    Expired,

    #[error("Token subject is not a user id: {0}")]
    InvalidSubject(String),
}

/// Decoded session state, valid for the lifetime of the login
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    user_id: i64,
    username: String,
    expires_at: i64,
}

impl Session {
    /// Decode a stored token into a session. Called once at login; the
    /// resulting session is passed around by reference afterwards.
    pub fn from_token(token: impl Into<String>) -> Result<Session, SessionError> {
        let token = token.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false; // expiry checked below, with a clearer error
        validation.validate_aud = false;

        let data = decode::<Claims>(&token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|e| SessionError::InvalidToken(e.to_string()))?;

        let claims = data.claims;
        if claims.exp <= Utc::now().timestamp() {
            return Err(SessionError::Expired);
        }

        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| SessionError::InvalidSubject(claims.sub.clone()))?;

        Ok(Session {
            token,
            user_id,
            username: claims.username,
            expires_at: claims.exp,
        })
    }

    /// Authenticated user id
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Username from the token claims
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Raw token, for the HTTP client's bearer header
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the session has expired relative to now
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now().timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn make_token(sub: &str, exp: i64) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            username: "operador1".to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    #[test]
    fn decodes_user_id_from_subject() {
        let token = make_token("42", Utc::now().timestamp() + 3600);
        let session = Session::from_token(token).unwrap();
        assert_eq!(session.user_id(), 42);
        assert_eq!(session.username(), "operador1");
        assert!(!session.is_expired());
    }

    #[test]
    fn rejects_expired_token() {
        let token = make_token("42", Utc::now().timestamp() - 10);
        assert!(matches!(
            Session::from_token(token),
            Err(SessionError::Expired)
        ));
    }

    #[test]
    fn rejects_non_numeric_subject() {
        let token = make_token("not-a-number", Utc::now().timestamp() + 3600);
        assert!(matches!(
            Session::from_token(token),
            Err(SessionError::InvalidSubject(_))
        ));
    }

    #[test]
    fn rejects_garbage_token() {
        assert!(matches!(
            Session::from_token("not.a.jwt"),
            Err(SessionError::InvalidToken(_))
        ));
    }
}
