/**
 * Avatar Derivation
 *
 * Computes the deterministic Gravatar URL stored on a user at registration.
 */

/// Gravatar URL for an email address
///
/// The digest is taken over the trimmed, lowercased address, so the same
/// mailbox always maps to the same avatar regardless of how the user typed
/// it. Options: 200px, PG rating, "mystery man" fallback.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = md5::compute(normalized.as_bytes());
    format!("https://www.gravatar.com/avatar/{digest:x}?s=200&r=pg&d=mm")
}
