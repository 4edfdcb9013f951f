/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 * Tokens embed the minimal identity the UI needs ({id, name, avatar}) and
 * expire after one hour.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime in seconds
pub const TOKEN_TTL_SECS: u64 = 3600;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Display name
    pub name: String,
    /// Avatar URL
    pub avatar: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a JWT token for a user
///
/// The token carries `{id, name, avatar}` and expires `TOKEN_TTL_SECS`
/// after issuance.
pub fn create_token(
    secret: &str,
    user_id: Uuid,
    name: &str,
    avatar: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user_id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// Verify and decode a JWT token
///
/// Rejects bad signatures and expired tokens. Pure: no store access, no
/// side effects.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_create_token() {
        let token = create_token(SECRET, Uuid::new_v4(), "John", "https://avatar").unwrap();
        assert!(!token.is_empty());
        // header.payload.signature
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_round_trip_preserves_identity() {
        let user_id = Uuid::new_v4();
        let token = create_token(SECRET, user_id, "John", "https://avatar").unwrap();

        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.name, "John");
        assert_eq!(claims.avatar, "https://avatar");
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = create_token(SECRET, Uuid::new_v4(), "John", "https://avatar").unwrap();
        assert!(verify_token("other-secret", &token).is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let token = create_token(SECRET, Uuid::new_v4(), "John", "https://avatar").unwrap();
        let tampered = format!("{}x", token);
        assert!(verify_token(SECRET, &tampered).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = unix_now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            name: "John".to_string(),
            avatar: "https://avatar".to_string(),
            // well past the default validation leeway
            exp: now - 2 * TOKEN_TTL_SECS,
            iat: now - 3 * TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        let err = verify_token(SECRET, &token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(verify_token(SECRET, "not.a.token").is_err());
    }
}
