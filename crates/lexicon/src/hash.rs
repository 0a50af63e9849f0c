use sha2::{Digest, Sha256};

/// Salt appended to unmatched tokens before hashing.
///
/// Changing it changes every synthetic lemma and invalidates seeded indexes.
pub const NO_MATCH_SALT: &str = "namefp:no-match:v1";

/// Synthetic lemma for a token the dictionary does not know:
/// lowercase hex of SHA-256 over the token bytes followed by the salt.
pub fn no_match_lemma(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.update(NO_MATCH_SALT.as_bytes());
    hex::encode(hasher.finalize())
}
