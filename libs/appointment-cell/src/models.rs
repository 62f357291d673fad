use serde::{Deserialize, Serialize};

use booking_queue_cell::LiveQueueEntry;
use doctor_cell::DoctorStatus;

/// Body returned by `POST /predict/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub load: i64,
    pub status: DoctorStatus,
    pub queue: i64,
    pub wait: i64,
    pub arrival_time: String,
    pub consult: i64,
    pub recommend: String,
    pub explain: String,
    pub suggested_doctor: String,
    pub live_queue: Vec<LiveQueueEntry>,
}
