use axum::{
    Router,
    routing::post,
};

use crate::handlers;
use crate::services::AccountService;

pub fn auth_routes(accounts: AccountService) -> Router {
    Router::new()
        .route("/register/", post(handlers::register))
        .route("/register", post(handlers::register))
        .route("/login/", post(handlers::login))
        .route("/login", post(handlers::login))
        .with_state(accounts)
}
