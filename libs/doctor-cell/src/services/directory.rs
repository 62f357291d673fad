use tracing::debug;

use crate::models::{Doctor, DoctorError, DoctorStatus, Specialty};

/// Read-only doctor roster, fixed at startup and shared by the handlers,
/// the triage router and the intake flow.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// The clinic's standing roster.
    pub fn clinic_roster() -> Self {
        Self::new(vec![
            Doctor::new("Dr. Ayush", Specialty::Cardiology, DoctorStatus::Available, "Adult Surgery", "09:00 AM"),
            Doctor::new("Dr. Sharma", Specialty::Pediatrics, DoctorStatus::Busy, "Child Care", "11:30 AM"),
            Doctor::new("Dr. Patel", Specialty::General, DoctorStatus::Available, "Minor Diseases", "08:30 AM"),
            Doctor::new("Dr. Sarah", Specialty::Orthopedic, DoctorStatus::Available, "Surgery", "10:15 AM"),
        ])
    }

    pub fn list_doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Status of the named doctor; unknown names count as available.
    pub fn status_of(&self, name: &str) -> DoctorStatus {
        match self.doctors.iter().find(|d| d.name == name) {
            Some(doctor) => doctor.status,
            None => {
                debug!("No directory entry for '{}', defaulting to Available", name);
                DoctorStatus::Available
            }
        }
    }

    /// First doctor listed for the specialty.
    pub fn find_by_specialty(&self, specialty: Specialty) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.specialty == specialty)
    }

    pub fn require_specialty(&self, specialty: Specialty) -> Result<&Doctor, DoctorError> {
        self.find_by_specialty(specialty)
            .ok_or(DoctorError::MissingSpecialty(specialty))
    }
}

impl Default for DoctorDirectory {
    fn default() -> Self {
        Self::clinic_roster()
    }
}
