use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Local;
use tracing::debug;

use shared_models::appointment::NewAppointment;
use shared_models::error::AppError;

use crate::models::PredictionResponse;
use crate::services::IntakeService;

#[axum::debug_handler]
pub async fn predict_queue(
    State(service): State<Arc<IntakeService>>,
    Json(request): Json<NewAppointment>,
) -> Result<Json<PredictionResponse>, AppError> {
    debug!("Intake request for {}", request.patient_name);

    let now = Local::now().naive_local();
    let response = service.predict(&request, now).await?;

    Ok(Json(response))
}
