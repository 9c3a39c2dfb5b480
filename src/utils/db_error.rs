//! Translation of SQLx errors into store errors.

use crate::domain::error::StoreError;

/// Name of the unique constraint on `links.short_code`.
const SHORT_CODE_CONSTRAINT: &str = "links_short_code_key";

/// Returns true if the error is a unique violation on the short code column.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_CODE_CONSTRAINT))
}

/// Returns true if the error is a foreign key violation (e.g. a visit for a deleted link).
pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_code(&e) {
            return StoreError::Conflict;
        }

        if is_foreign_key_violation(&e) || matches!(e, sqlx::Error::RowNotFound) {
            return StoreError::NotFound;
        }

        tracing::error!(error = %e, "Database error");
        StoreError::Backend(e.to_string())
    }
}
