use thiserror::Error;

use shared_database::StoreError;
use shared_models::error::AppError;

pub const ACCOUNT_CREATED: &str = "Account created successfully";
pub const LOGIN_SUCCESSFUL: &str = "Login successful";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername(_) => AuthError::DuplicateUsername,
            other => AuthError::Store(other),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateUsername | AuthError::InvalidCredentials => {
                AppError::BadRequest(err.to_string())
            }
            AuthError::Store(store_err) => store_err.into(),
        }
    }
}
