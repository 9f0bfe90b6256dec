//! Session token generation
//!
//! Tokens are short random letter strings. They are not checked against
//! existing sessions.

use rand::distributions::Slice;
use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a random token of `len` ASCII letters
pub fn generate(len: usize) -> String {
    // Only fails for an empty alphabet
    let Ok(letters) = Slice::new(LETTERS) else {
        return String::new();
    };
    rand::thread_rng()
        .sample_iter(letters)
        .take(len)
        .map(|&b| char::from(b))
        .collect()
}
