//! DTOs for link shortening endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Characters allowed in a caller-supplied alias. Empty matches, as an empty
/// alias counts as absent.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").expect("alias regex is valid"));

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to redirect to.
    #[validate(url(message = "Original URL must be a valid URL"))]
    #[validate(custom(function = "validate_header_safe"))]
    pub original_url: String,

    /// ISO 8601 expiry; naive values are read as UTC.
    #[serde(default)]
    pub expires_at: Option<String>,

    /// Custom short code used instead of a generated one.
    #[serde(default)]
    #[validate(length(max = 20, message = "Alias must be at most 20 characters"))]
    #[validate(regex(
        path = *ALIAS_REGEX,
        message = "Alias may only contain letters, digits, '-' and '_'"
    ))]
    pub alias: Option<String>,
}

/// Rejects control characters, which URL parsing tolerates but a `Location`
/// header cannot carry.
fn validate_header_safe(url: &str) -> Result<(), ValidationError> {
    if url.chars().any(char::is_control) {
        return Err(ValidationError::new("control_characters")
            .with_message("Original URL must not contain control characters".into()));
    }

    Ok(())
}

/// Created short code. The field carries the code itself, not a full URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}
