use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum NotificationError {
    /// Anything the gateway (or the road to it) reported, verbatim.
    #[error("{0}")]
    Gateway(String),
}

impl From<reqwest::Error> for NotificationError {
    fn from(err: reqwest::Error) -> Self {
        NotificationError::Gateway(err.to_string())
    }
}

impl From<NotificationError> for AppError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::Gateway(detail) => AppError::Gateway(detail),
        }
    }
}
