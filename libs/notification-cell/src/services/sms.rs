use std::sync::Arc;

use tracing::{error, info};

use shared_config::AppConfig;

use crate::error::NotificationError;
use crate::models::{OutboundSms, SmsRequest};
use crate::services::twilio::SmsGateway;

const INTERNATIONAL_PREFIX: char = '+';

/// Trims the number and prefixes `country_code` unless it is already international.
pub fn normalize_phone(raw: &str, country_code: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with(INTERNATIONAL_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{}{}", country_code, trimmed)
    }
}

pub fn message_body(patient_name: &str, doctor_name: &str, wait_time: &str) -> String {
    format!(
        "Hello {}, your appointment with {} is confirmed. Estimated wait time: {} mins. - MedhTech AI",
        patient_name, doctor_name, wait_time
    )
}

pub struct NotificationService {
    gateway: Arc<dyn SmsGateway>,
    sender: String,
    country_code: String,
}

impl NotificationService {
    pub fn new(gateway: Arc<dyn SmsGateway>, sender: &str, country_code: &str) -> Self {
        Self {
            gateway,
            sender: sender.to_string(),
            country_code: country_code.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig, gateway: Arc<dyn SmsGateway>) -> Self {
        Self::new(
            gateway,
            &config.twilio_phone_number,
            &config.sms_default_country_code,
        )
    }

    pub fn compose(&self, request: &SmsRequest) -> OutboundSms {
        OutboundSms {
            from: self.sender.clone(),
            to: normalize_phone(&request.phone_number, &self.country_code),
            body: message_body(&request.patient_name, &request.doctor_name, &request.wait_time),
        }
    }

    /// Single attempt; gateway failures come back as `NotificationError::Gateway`.
    pub async fn send(&self, request: &SmsRequest) -> Result<String, NotificationError> {
        let message = self.compose(request);
        info!("Sending SMS from {} to {}", message.from, message.to);

        match self.gateway.send_message(&message).await {
            Ok(sid) => {
                info!("SMS accepted, message sid {}", sid);
                Ok(sid)
            }
            Err(e) => {
                error!("SMS to {} failed: {}", message.to, e);
                Err(e)
            }
        }
    }
}
