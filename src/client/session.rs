/**
 * Client-Side Session Decode
 *
 * Decodes the stored bearer token into the identity it embeds WITHOUT
 * checking the signature: a convenience cache for display, not a trust
 * boundary. The server re-verifies the token on every private call. Expiry
 * is checked locally so a stale session logs out on startup instead of
 * failing its first request.
 */

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::client::token::TokenStore;

/// Identity embedded in the session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

/// The claim fields the client cares about
#[derive(Debug, Deserialize)]
struct TokenPayload {
    sub: String,
    name: String,
    avatar: String,
}

/// Decode a token into its embedded identity, signature unchecked
///
/// Accepts the token with or without its `"Bearer "` prefix (the server
/// returns it prefixed, ready for the Authorization header). Expired or
/// malformed tokens error.
pub fn decode_user(token: &str) -> Result<SessionUser, jsonwebtoken::errors::Error> {
    let raw = token.strip_prefix("Bearer ").unwrap_or(token);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();

    let data = decode::<TokenPayload>(raw, &DecodingKey::from_secret(&[]), &validation)?;

    Ok(SessionUser {
        id: data.claims.sub,
        name: data.claims.name,
        avatar: data.claims.avatar,
    })
}

/// Restore the persisted session, if one is still live
///
/// Loads the stored token and decodes it. A missing, malformed, or expired
/// token clears the store and yields `None`, so the application starts
/// logged out.
pub fn restore_session<S: TokenStore>(store: &S) -> Option<(String, SessionUser)> {
    let token = store.load()?;

    match decode_user(&token) {
        Ok(user) => Some((token, user)),
        Err(e) => {
            tracing::debug!("persisted token rejected, clearing session: {:?}", e);
            store.clear().ok();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::token::MemoryTokenStore;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn token_with_exp(exp: u64) -> String {
        let claims = json!({
            "sub": "3f2b8c1e-0000-0000-0000-000000000000",
            "name": "John Doe",
            "avatar": "https://avatar",
            "iat": now(),
            "exp": exp,
        });
        encode(
            &Header::default(),
            &claims,
            // The client never knows this secret; decode must not need it
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_without_the_signing_secret() {
        let token = token_with_exp(now() + 3600);
        let user = decode_user(&token).unwrap();

        assert_eq!(user.id, "3f2b8c1e-0000-0000-0000-000000000000");
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.avatar, "https://avatar");
    }

    #[test]
    fn test_decode_accepts_the_bearer_prefix() {
        let token = format!("Bearer {}", token_with_exp(now() + 3600));
        assert!(decode_user(&token).is_ok());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Past the default validation leeway
        let token = token_with_exp(now() - 600);
        assert!(decode_user(&token).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(decode_user("not.a.token").is_err());
    }

    #[test]
    fn test_restore_live_session() {
        let store = MemoryTokenStore::new();
        let token = format!("Bearer {}", token_with_exp(now() + 3600));
        store.save(&token).unwrap();

        let (restored_token, user) = restore_session(&store).unwrap();
        assert_eq!(restored_token, token);
        assert_eq!(user.name, "John Doe");
    }

    #[test]
    fn test_restore_clears_an_expired_session() {
        let store = MemoryTokenStore::new();
        store
            .save(&format!("Bearer {}", token_with_exp(now() - 600)))
            .unwrap();

        assert!(restore_session(&store).is_none());
        // The stale token is gone; the next startup stays logged out
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_restore_with_no_token() {
        let store = MemoryTokenStore::new();
        assert!(restore_session(&store).is_none());
    }
}
