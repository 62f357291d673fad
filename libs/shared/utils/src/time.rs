use chrono::NaiveDateTime;

/// 12-hour wall clock with AM/PM suffix, e.g. `09:05 AM`.
pub fn clock_time(at: &NaiveDateTime) -> String {
    at.format("%I:%M %p").to_string()
}
