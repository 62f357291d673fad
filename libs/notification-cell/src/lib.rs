// libs/notification-cell/src/lib.rs
//! # Notification Cell
//!
//! Appointment confirmation texts. The client calls `POST /send-sms/` once it
//! has a wait estimate; delivery is best effort and a failure never touches
//! the stored queue.
//!
//! ```text
//! +-------------------------------------------------+
//! |  handlers.rs     |  POST /send-sms/             |
//! |  services/sms.rs |  number normalization, body  |
//! |  services/       |                              |
//! |    twilio.rs     |  Twilio Messages API client  |
//! +-------------------------------------------------+
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::NotificationError;
pub use models::*;
pub use router::notification_routes;
pub use services::*;
