use serde::{Deserialize, Serialize};

/// Body of `POST /send-sms/`. `wait_time` is echoed into the text as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsRequest {
    pub phone_number: String,
    pub patient_name: String,
    pub wait_time: String,
    pub doctor_name: String,
}

/// A fully addressed message ready for the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundSms {
    pub from: String,
    pub to: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TwilioMessageResponse {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TwilioErrorResponse {
    pub message: String,
}
