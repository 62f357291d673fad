use chrono::{NaiveDate, NaiveDateTime};

use shared_config::AppConfig;
use shared_models::appointment::NewAppointment;
use shared_models::auth::Credentials;

use crate::random::RandomSource;

pub struct TestConfig {
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_phone_number: String,
    pub twilio_api_base_url: String,
    pub max_queue_size: i64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            twilio_account_sid: "AC_test_account_sid".to_string(),
            twilio_auth_token: "test-auth-token".to_string(),
            twilio_phone_number: "+15005550006".to_string(),
            twilio_api_base_url: "http://localhost:4010".to_string(),
            max_queue_size: 6,
        }
    }
}

impl TestConfig {
    pub fn with_gateway(base_url: &str) -> Self {
        Self {
            twilio_api_base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".to_string(),
            twilio_account_sid: self.twilio_account_sid.clone(),
            twilio_auth_token: self.twilio_auth_token.clone(),
            twilio_phone_number: self.twilio_phone_number.clone(),
            twilio_api_base_url: self.twilio_api_base_url.clone(),
            max_queue_size: self.max_queue_size,
            ..AppConfig::default()
        }
    }
}

/// Always answers `value`, clamped into the requested range.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub i64);

impl RandomSource for FixedRandom {
    fn between(&self, low: i64, high: i64) -> i64 {
        self.0.clamp(low, high.max(low))
    }
}

/// Smallest value of every requested range.
pub fn lowest() -> FixedRandom {
    FixedRandom(i64::MIN)
}

/// Largest value of every requested range.
pub fn highest() -> FixedRandom {
    FixedRandom(i64::MAX)
}

pub fn sample_appointment(patient_name: &str) -> NewAppointment {
    NewAppointment {
        patient_name: patient_name.to_string(),
        phone_number: "9876543210".to_string(),
        patient_age: 34,
        disease: "seasonal flu".to_string(),
        doctor_name: "Dr. Patel".to_string(),
    }
}

pub fn sample_credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// A fixed morning instant so clock assertions are stable.
pub fn clinic_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid clinic morning")
}
