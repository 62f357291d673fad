use std::sync::Arc;

use axum::{extract::State, Json};

use shared_models::error::AppError;
use shared_models::response::MessageResponse;

use crate::models::SmsRequest;
use crate::services::NotificationService;

pub const SMS_SENT: &str = "SMS sent successfully";

pub async fn send_sms(
    State(service): State<Arc<NotificationService>>,
    Json(request): Json<SmsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    service.send(&request).await?;
    Ok(Json(MessageResponse::new(SMS_SENT)))
}
