// ==========================================
// Sorare MLB Optimizer - repository error types
// ==========================================

use thiserror::Error;

/// Repository-layer errors.
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== database errors =====
    #[error("database connection failed: {0}")]
    DatabaseConnectionError(String),

    #[error("database lock failed: {0}")]
    LockError(String),

    #[error("database transaction failed: {0}")]
    DatabaseTransactionError(String),

    #[error("database query failed: {0}")]
    DatabaseQueryError(String),

    #[error("unique constraint violation: {0}")]
    UniqueConstraintViolation(String),

    // ===== data errors =====
    #[error("stored lineup payload corrupt: {0}")]
    CorruptPayload(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("UNIQUE") => {
                RepositoryError::UniqueConstraintViolation(msg.clone())
            }
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::CorruptPayload(err.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
