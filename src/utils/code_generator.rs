//! Short code generation.
//!
//! Two interchangeable strategies over the same 62-symbol alphabet:
//! a uniform random draw (the default) and a deterministic SHA-256
//! derivation used for the post-collision fallback.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Alphabet used for short codes: `A-Z`, `a-z`, `0-9`.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default short code length.
pub const CODE_LENGTH: usize = 6;

/// Code length used after the collision retry budget is exhausted.
pub const FALLBACK_CODE_LENGTH: usize = 8;

/// Generates a random short code of the given length.
///
/// Each symbol is an independent uniform draw from [`ALPHABET`], so no
/// symbol is favored over any other.
pub fn random_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Derives a short code from a URL and a salt.
///
/// Hashes `url` together with `salt` and maps the first `length` digest
/// bytes into [`ALPHABET`]. Deterministic for identical inputs, so callers
/// must vary the salt between attempts.
pub fn derived_code(url: &str, salt: u64, length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(salt.to_le_bytes());
    let digest = hasher.finalize();

    digest
        .iter()
        .take(length)
        .map(|b| ALPHABET[*b as usize % ALPHABET.len()] as char)
        .collect()
}
