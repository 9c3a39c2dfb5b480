//! Error types for the storage and service layers.
//!
//! Both enums are closed sets free of transport concepts; the HTTP boundary
//! translates them in [`crate::error::AppError`].

/// Failures reported by link and visit stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The short code is already taken by another link.
    #[error("short code already exists")]
    Conflict,

    /// The referenced record does not exist.
    #[error("record not found")]
    NotFound,

    /// The backend failed to execute the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failures reported by [`crate::application::services::LinkService`].
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The code does not exist, or the link behind it has expired.
    #[error("Short link '{code}' not found")]
    NotFound { code: String },

    #[error("Alias '{alias}' is already taken")]
    AliasTaken { alias: String },

    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: &'static str },

    #[error("Invalid expiration date '{value}'")]
    InvalidExpiration { value: String },

    /// Every generated code collided with an existing one.
    #[error("Failed to generate a unique short code after {attempts} attempts")]
    CodeGenerationExhausted { attempts: usize },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl LinkError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }
}
