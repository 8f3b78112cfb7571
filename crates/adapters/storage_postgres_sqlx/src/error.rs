//! Storage-specific error type wrapping sqlx errors.

use buscadog_domain::error::BuscaDogError;

/// Errors originating from the `PostgreSQL` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for BuscaDogError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_sqlx_errors_as_opaque_storage_errors() {
        let err = StorageError::from(sqlx::Error::PoolTimedOut);
        let top = BuscaDogError::from(err);
        assert!(matches!(top, BuscaDogError::Storage(_)));
        assert_eq!(top.to_string(), "storage error");
    }
}
