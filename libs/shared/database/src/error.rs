use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Username already exists")]
    DuplicateUsername(String),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername(_) => AppError::BadRequest(err.to_string()),
            StoreError::Sqlx(e) => AppError::Database(e.to_string()),
        }
    }
}
