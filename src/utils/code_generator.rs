//! Short code generation.
//!
//! Codes are fixed-length random tokens over an alphanumeric alphabet.
//! The generator makes no uniqueness guarantee by itself; callers check
//! the store and retry on collision.

use rand::Rng;

/// Alphabet used for short codes (62 alphanumeric characters).
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated short codes.
///
/// 62^7 ≈ 3.5 trillion combinations, which keeps the collision
/// probability low enough that the caller's bounded retry loop almost
/// never runs more than once.
pub const CODE_LENGTH: usize = 7;

/// Generates a random short code.
///
/// # Examples
///
/// ```
/// use snip::utils::code_generator::{generate_code, CODE_LENGTH};
///
/// let code = generate_code();
/// assert_eq!(code.len(), CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
