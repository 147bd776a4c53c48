// src/text.rs
//! Input normalization and content fingerprinting for de-duplication.

use sha2::{Digest, Sha256};

/// Trims and lower-cases raw input, the form the graph builder expects.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// SHA-256 hex digest identifying a (normalized text, vertex limit) pair.
/// The limit follows a NUL separator so `("ab", 12)` and `("ab1", 2)` differ.
#[must_use]
pub fn fingerprint(normalized: &str, max_words: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    hasher.update([0u8]);
    hasher.update(max_words.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  The Cat SAT.\n"), "the cat sat.");
    }

    #[test]
    fn test_fingerprint_is_stable_hex() {
        let a = fingerprint("the cat", 10);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(a, fingerprint("the cat", 10));
    }

    #[test]
    fn test_fingerprint_separates_text_from_limit() {
        assert_ne!(fingerprint("ab", 12), fingerprint("ab1", 2));
    }

    #[test]
    fn test_fingerprint_depends_on_limit() {
        assert_ne!(fingerprint("the cat", 10), fingerprint("the cat", 20));
    }
}
