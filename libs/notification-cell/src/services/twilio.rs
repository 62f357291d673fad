// libs/notification-cell/src/services/twilio.rs
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, warn};

use shared_config::AppConfig;

use crate::error::NotificationError;
use crate::models::{OutboundSms, TwilioErrorResponse, TwilioMessageResponse};

/// Outbound text gateway. Returns the gateway's message id on acceptance.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send_message(&self, message: &OutboundSms) -> Result<String, NotificationError>;
}

/// Twilio Programmable Messaging client
/// POST /2010-04-01/Accounts/{AccountSid}/Messages.json
pub struct TwilioGateway {
    client: Client,
    account_sid: String,
    auth_token: String,
    base_url: String,
}

impl TwilioGateway {
    pub fn new(config: &AppConfig) -> Self {
        if !config.is_sms_configured() {
            warn!("Twilio credentials missing; SMS requests will be rejected by the gateway");
        }

        Self {
            client: Client::new(),
            account_sid: config.twilio_account_sid.clone(),
            auth_token: config.twilio_auth_token.clone(),
            base_url: config.twilio_api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        )
    }
}

#[async_trait]
impl SmsGateway for TwilioGateway {
    async fn send_message(&self, message: &OutboundSms) -> Result<String, NotificationError> {
        let url = self.messages_url();
        debug!("Sending message request to: {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("To", message.to.as_str()),
                ("From", message.from.as_str()),
                ("Body", message.body.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!("Twilio message creation failed: {} - {}", status, response_text);

            let reason = serde_json::from_str::<TwilioErrorResponse>(&response_text)
                .map(|e| e.message)
                .unwrap_or(response_text);

            return Err(NotificationError::Gateway(format!(
                "HTTP {} error: Unable to create record: {}",
                status.as_u16(),
                reason
            )));
        }

        let created: TwilioMessageResponse = serde_json::from_str(&response_text)
            .map_err(|e| NotificationError::Gateway(format!("Failed to parse gateway response: {}", e)))?;

        debug!("Twilio accepted message {} ({:?})", created.sid, created.status);
        Ok(created.sid)
    }
}
