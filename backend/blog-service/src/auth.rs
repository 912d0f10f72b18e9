/// JWT issuing and validation
///
/// Keys are installed once at startup and shared process-wide; handlers and
/// extractors only ever validate. Tokens carry the user id in `sub`.
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

static KEYS: OnceCell<Keys> = OnceCell::new();

/// Install the process-wide HMAC keys. Later calls are no-ops, so tests may
/// initialize repeatedly with the same secret.
pub fn initialize(secret: &str) {
    KEYS.get_or_init(|| Keys {
        encoding: EncodingKey::from_secret(secret.as_bytes()),
        decoding: DecodingKey::from_secret(secret.as_bytes()),
    });
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("JWT keys are not initialized")]
    NotInitialized,

    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// Issue a token for a user, valid for `ttl_secs` from now.
pub fn issue_token(user_id: Uuid, ttl_secs: i64) -> Result<String, AuthError> {
    let keys = KEYS.get().ok_or(AuthError::NotInitialized)?;
    let now = Utc::now();

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ttl_secs)).timestamp(),
    };

    Ok(encode(&Header::default(), &claims, &keys.encoding)?)
}

/// Validate a bearer token and return its claims.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>, AuthError> {
    let keys = KEYS.get().ok_or(AuthError::NotInitialized)?;
    Ok(decode::<Claims>(token, &keys.decoding, &Validation::default())?)
}

/// Validate a token and extract the user id from `sub`.
pub fn user_id_from_token(token: &str) -> Option<Uuid> {
    let data = validate_token(token).ok()?;
    Uuid::parse_str(&data.claims.sub).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        initialize("test-secret");
    }

    #[test]
    fn test_token_round_trip() {
        init();
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, 3600).unwrap();
        let data = validate_token(&token).unwrap();
        assert_eq!(data.claims.sub, user_id.to_string());
        assert_eq!(user_id_from_token(&token), Some(user_id));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        init();
        let token = issue_token(Uuid::new_v4(), -3600).unwrap();
        assert!(validate_token(&token).is_err());
        assert_eq!(user_id_from_token(&token), None);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        init();
        assert!(validate_token("not-a-jwt").is_err());
    }
}
