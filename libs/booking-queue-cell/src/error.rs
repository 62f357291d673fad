use thiserror::Error;

use shared_database::StoreError;
use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Queue store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid queue capacity {0}: must be at least 1")]
    InvalidCapacity(i64),
}

impl From<QueueError> for AppError {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::Store(store_err) => store_err.into(),
            QueueError::InvalidCapacity(_) => AppError::Internal(err.to_string()),
        }
    }
}
