//! Short code generation and alias validation utilities.
//!
//! Provides cryptographically secure random code generation and the rules that
//! caller-supplied aliases must follow.

use base64::Engine as _;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 8;

/// Maximum length of a caller-supplied alias, in characters.
pub const MAX_ALIAS_LENGTH: usize = 20;

/// Codes that cannot be used as aliases.
///
/// These collide with single-segment routes and would never reach the redirect handler.
pub const RESERVED_CODES: &[&str] = &["health", "shorten"];

/// Generates a random short code of exactly `length` characters.
///
/// Uses `getrandom` for entropy and encodes the bytes as URL-safe base64
/// without padding, so every character is drawn from `[A-Za-z0-9_-]`.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8);
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(length: usize) -> String {
    // Every 3 bytes yield 4 characters; round up and trim the excess.
    let mut buffer = vec![0u8; length.div_ceil(4) * 3];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buffer);
    code.truncate(length);
    code
}

/// Checks a caller-supplied alias against the length, character-set and
/// reserved-name rules.
///
/// Aliases use the same alphabet as generated codes: ASCII letters, digits,
/// `-` and `_`.
///
/// # Errors
///
/// Returns a human-readable reason when the alias is rejected.
pub fn check_alias(alias: &str) -> Result<(), &'static str> {
    if alias.len() > MAX_ALIAS_LENGTH {
        return Err("alias must be at most 20 characters");
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err("alias may only contain letters, digits, '-' and '_'");
    }

    if RESERVED_CODES.contains(&alias) {
        return Err("alias is reserved");
    }

    Ok(())
}
