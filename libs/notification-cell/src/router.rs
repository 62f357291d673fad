use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers;
use crate::services::NotificationService;

pub fn notification_routes(service: Arc<NotificationService>) -> Router {
    Router::new()
        .route("/send-sms/", post(handlers::send_sms))
        .route("/send-sms", post(handlers::send_sms))
        .with_state(service)
}
