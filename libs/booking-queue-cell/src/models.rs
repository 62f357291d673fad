use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use shared_models::appointment::Appointment;
use shared_utils::time::clock_time;

/// Priority score of the patient at the head of the queue.
pub const TOP_SCORE: i64 = 95;
/// Each later patient scores this much less than the one before (inclusive range).
pub const SCORE_STEP_MIN: i64 = 4;
pub const SCORE_STEP_MAX: i64 = 10;
/// Consultations start every 12 minutes and last 10.
pub const SLOT_CADENCE_MINUTES: i64 = 12;
pub const CONSULT_WINDOW_MINUTES: i64 = 10;

/// One patient in the computed queue view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueSlot {
    pub appointment_id: i64,
    pub name: String,
    pub score: i64,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

impl QueueSlot {
    pub fn to_entry(&self) -> LiveQueueEntry {
        LiveQueueEntry {
            name: self.name.clone(),
            score: self.score,
            start_time: clock_time(&self.starts_at),
            end_time: clock_time(&self.ends_at),
        }
    }
}

/// Wire form of a queue slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveQueueEntry {
    pub name: String,
    pub score: i64,
    pub start_time: String,
    pub end_time: String,
}

/// Result of admitting one appointment into the queue.
#[derive(Debug, Clone)]
pub struct Admission {
    pub appointment: Appointment,
    pub evicted_ids: Vec<i64>,
    pub live_queue: Vec<QueueSlot>,
}

impl Admission {
    pub fn live_queue_entries(&self) -> Vec<LiveQueueEntry> {
        self.live_queue.iter().map(QueueSlot::to_entry).collect()
    }
}
