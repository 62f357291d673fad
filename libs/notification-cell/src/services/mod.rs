pub mod sms;
pub mod twilio;

pub use sms::{message_body, normalize_phone, NotificationService};
pub use twilio::{SmsGateway, TwilioGateway};
