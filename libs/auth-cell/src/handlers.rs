use axum::{
    extract::{State, Json},
};

use shared_models::auth::Credentials;
use shared_models::error::AppError;
use shared_models::response::MessageResponse;

use crate::models::{ACCOUNT_CREATED, LOGIN_SUCCESSFUL};
use crate::services::AccountService;

pub async fn register(
    State(accounts): State<AccountService>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<MessageResponse>, AppError> {
    accounts.register(&credentials).await?;
    Ok(Json(MessageResponse::new(ACCOUNT_CREATED)))
}

pub async fn login(
    State(accounts): State<AccountService>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<MessageResponse>, AppError> {
    accounts.login(&credentials).await?;
    Ok(Json(MessageResponse::new(LOGIN_SUCCESSFUL)))
}
