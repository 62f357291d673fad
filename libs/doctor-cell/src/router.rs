use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::DoctorDirectory;

pub fn doctor_routes(directory: Arc<DoctorDirectory>) -> Router {
    Router::new()
        .route("/doctors/", get(handlers::list_doctors))
        .route("/doctors", get(handlers::list_doctors))
        .with_state(directory)
}
