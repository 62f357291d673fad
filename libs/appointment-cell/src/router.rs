use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers;
use crate::services::IntakeService;

pub fn appointment_routes(service: Arc<IntakeService>) -> Router {
    Router::new()
        .route("/predict/", post(handlers::predict_queue))
        .route("/predict", post(handlers::predict_queue))
        .with_state(service)
}
