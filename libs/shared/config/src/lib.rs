use std::env;
use tracing::warn;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://clinic_queue.db?mode=rwc";
pub const DEFAULT_TWILIO_PHONE_NUMBER: &str = "+17744925982";
pub const DEFAULT_TWILIO_API_BASE_URL: &str = "https://api.twilio.com";
pub const DEFAULT_COUNTRY_CODE: &str = "+91";
pub const DEFAULT_MAX_QUEUE_SIZE: i64 = 6;
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_phone_number: String,
    pub twilio_api_base_url: String,
    pub sms_default_country_code: String,
    pub max_queue_size: i64,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("DATABASE_URL not set, using default");
                    DEFAULT_DATABASE_URL.to_string()
                }),
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID")
                .unwrap_or_else(|_| {
                    warn!("TWILIO_ACCOUNT_SID not set, using empty value");
                    String::new()
                }),
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN")
                .unwrap_or_else(|_| {
                    warn!("TWILIO_AUTH_TOKEN not set, using empty value");
                    String::new()
                }),
            twilio_phone_number: env::var("TWILIO_PHONE_NUMBER")
                .unwrap_or_else(|_| {
                    warn!("TWILIO_PHONE_NUMBER not set, using default");
                    DEFAULT_TWILIO_PHONE_NUMBER.to_string()
                }),
            twilio_api_base_url: env::var("TWILIO_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TWILIO_API_BASE_URL.to_string()),
            sms_default_country_code: env::var("SMS_DEFAULT_COUNTRY_CODE")
                .unwrap_or_else(|_| DEFAULT_COUNTRY_CODE.to_string()),
            max_queue_size: parse_or_default("MAX_QUEUE_SIZE", DEFAULT_MAX_QUEUE_SIZE),
            port: parse_or_default("PORT", DEFAULT_PORT),
        };

        if !config.is_sms_configured() {
            warn!("SMS gateway not fully configured - missing Twilio credentials");
        }

        config
    }

    pub fn is_sms_configured(&self) -> bool {
        !self.twilio_account_sid.is_empty()
            && !self.twilio_auth_token.is_empty()
            && !self.twilio_phone_number.is_empty()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            twilio_account_sid: String::new(),
            twilio_auth_token: String::new(),
            twilio_phone_number: DEFAULT_TWILIO_PHONE_NUMBER.to_string(),
            twilio_api_base_url: DEFAULT_TWILIO_API_BASE_URL.to_string(),
            sms_default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            max_queue_size: DEFAULT_MAX_QUEUE_SIZE,
            port: DEFAULT_PORT,
        }
    }
}

fn parse_or_default<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
