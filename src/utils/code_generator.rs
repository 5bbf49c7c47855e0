//! Short code generation.

use base64::Engine as _;

/// Length of a generated short code, in characters.
pub const CODE_LENGTH: usize = 6;

/// Random bytes drawn per code. Base64 expands 6 bytes into 8 characters;
/// the encoded string is truncated to [`CODE_LENGTH`].
const CODE_LENGTH_BYTES: usize = 6;

/// Generates a random 6-character short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, so every character comes from a 64-symbol alphabet.
/// Collision handling is the caller's concern; at 6 characters the space
/// holds 64^6 (~6.9e10) codes.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    code.truncate(CODE_LENGTH);
    code
}
