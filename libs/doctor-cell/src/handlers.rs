use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use crate::models::Doctor;
use crate::services::DoctorDirectory;

pub async fn list_doctors(
    State(directory): State<Arc<DoctorDirectory>>,
) -> Json<Vec<Doctor>> {
    debug!("Listing {} doctors", directory.list_doctors().len());
    Json(directory.list_doctors().to_vec())
}
