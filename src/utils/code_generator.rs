//! Short code generation.
//!
//! Short codes are random bytes rendered as lowercase hexadecimal.

/// Number of random bytes in a short code (two hex characters each).
const CODE_LENGTH_BYTES: usize = 16;

/// Length of a generated short code in characters.
pub const CODE_LENGTH: usize = CODE_LENGTH_BYTES * 2;

/// Generates a random short code.
///
/// Uses `getrandom` for entropy and hex-encodes the result, producing a
/// 32-character lowercase code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}

/// Returns true if `code` has the shape of a generated short code.
pub fn is_generated_code(code: &str) -> bool {
    code.len() == CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
