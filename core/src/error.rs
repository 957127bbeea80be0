// core/src/error.rs
use thiserror::Error;

/// Failure raised by a [`Store`](crate::store::Store) operation.
///
/// A lookup that finds nothing is not an error; gateway methods return
/// `Ok(None)` for that and leave the interpretation to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database operation failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Schema migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
