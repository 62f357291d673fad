use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    Cardiology,
    Pediatrics,
    General,
    Orthopedic,
}

impl Specialty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Cardiology => "Cardiology",
            Specialty::Pediatrics => "Pediatrics",
            Specialty::General => "General",
            Specialty::Orthopedic => "Orthopedic",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DoctorStatus {
    #[default]
    Available,
    Busy,
}

/// Directory entry. Field names on the wire follow the clinic frontend:
/// `{name, spec, status, cat, arrival}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    #[serde(rename = "spec")]
    pub specialty: Specialty,
    pub status: DoctorStatus,
    #[serde(rename = "cat")]
    pub category: String,
    pub arrival: String,
}

impl Doctor {
    pub fn new(
        name: &str,
        specialty: Specialty,
        status: DoctorStatus,
        category: &str,
        arrival: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            specialty,
            status,
            category: category.to_string(),
            arrival: arrival.to_string(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DoctorError {
    #[error("No {0} doctor in the directory")]
    MissingSpecialty(Specialty),
}
