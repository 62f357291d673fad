use serde::{Deserialize, Serialize};

/// Intake submission as posted to `/predict/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient_name: String,
    pub phone_number: String,
    pub patient_age: i64,
    pub disease: String,
    pub doctor_name: String,
}

/// A persisted appointment. Ids grow with creation order and are never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    pub phone_number: String,
    pub patient_age: i64,
    pub disease: String,
    pub doctor_name: String,
}
