/// Storage-specific errors
use openmusic_core::CatalogError;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// A write referenced a row that does not exist (e.g. a song's album)
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            StorageError::Database(sqlx::Error::Database(db_err)) => {
                db_err.is_foreign_key_violation()
            }
            _ => false,
        }
    }
}

impl From<StorageError> for CatalogError {
    fn from(err: StorageError) -> Self {
        if err.is_foreign_key_violation() {
            return CatalogError::invariant("Referenced album does not exist.");
        }
        CatalogError::storage(err.to_string())
    }
}
