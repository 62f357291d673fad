use chrono::{Duration, NaiveDateTime};

use shared_utils::random::RandomSource;

pub const LOAD_RANGE: (i64, i64) = (40, 95);
pub const QUEUE_POSITION_RANGE: (i64, i64) = (1, 15);
pub const CONSULT_RANGE: (i64, i64) = (10, 30);
pub const WAIT_JITTER_RANGE: (i64, i64) = (1, 10);
pub const MINUTES_PER_POSITION: i64 = 3;

/// Presentation figures shown next to an intake. They are drawn fresh on
/// every call and do not reflect the stored queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitEstimate {
    pub load: i64,
    pub queue_position: i64,
    pub consult_minutes: i64,
    pub wait_minutes: i64,
    pub arrival: NaiveDateTime,
}

impl WaitEstimate {
    pub fn draw(random: &dyn RandomSource, now: NaiveDateTime) -> Self {
        let load = random.between(LOAD_RANGE.0, LOAD_RANGE.1);
        let queue_position = random.between(QUEUE_POSITION_RANGE.0, QUEUE_POSITION_RANGE.1);
        let consult_minutes = random.between(CONSULT_RANGE.0, CONSULT_RANGE.1);
        let wait_minutes = queue_position * MINUTES_PER_POSITION
            + random.between(WAIT_JITTER_RANGE.0, WAIT_JITTER_RANGE.1);

        Self {
            load,
            queue_position,
            consult_minutes,
            wait_minutes,
            arrival: now + Duration::minutes(wait_minutes),
        }
    }
}
