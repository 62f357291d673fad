//! Keyword triage: suggests a doctor from the disease text and patient age,
//! with a line-by-line explanation of the rules that fired.

use doctor_cell::{DoctorDirectory, DoctorError, Specialty};

/// Separator between rendered explanation lines.
pub const EXPLANATION_SEPARATOR: &str = "<br>";
const BULLET: &str = "• ";

const SENIOR_AGE: i64 = 60;
const PEDIATRIC_AGE: i64 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageDecision {
    pub suggested_doctor: String,
    pub specialty: Specialty,
    pub explanation_lines: Vec<String>,
    pub recommendation: String,
}

impl TriageDecision {
    /// Bulleted lines joined with `<br>`, as the frontend renders them.
    pub fn explanation(&self) -> String {
        self.explanation_lines
            .iter()
            .map(|line| format!("{}{}", BULLET, line))
            .collect::<Vec<_>>()
            .join(EXPLANATION_SEPARATOR)
    }
}

#[derive(Debug, Clone)]
pub struct TriageRouter {
    pediatrics: String,
    cardiology: String,
    general: String,
}

impl TriageRouter {
    pub fn from_directory(directory: &DoctorDirectory) -> Result<Self, DoctorError> {
        Ok(Self {
            pediatrics: directory.require_specialty(Specialty::Pediatrics)?.name.clone(),
            cardiology: directory.require_specialty(Specialty::Cardiology)?.name.clone(),
            general: directory.require_specialty(Specialty::General)?.name.clone(),
        })
    }

    /// Never fails; an empty disease text simply falls through to the general queue.
    pub fn route(&self, disease: &str, age: i64) -> TriageDecision {
        let mut lines = vec![format!("Base triage for '{}'", disease)];

        if age > SENIOR_AGE {
            lines.push("Age > 60 elevated priority score".to_string());
        } else if age < PEDIATRIC_AGE {
            lines.push("Pediatric status prioritized".to_string());
        }

        let disease_lower = disease.to_lowercase();

        let (doctor, specialty, recommendation) =
            if disease_lower.contains("child") || age < PEDIATRIC_AGE {
                let doctor = &self.pediatrics;
                lines.push(format!("Routed to {} (Pediatrics)", doctor));
                (
                    doctor,
                    Specialty::Pediatrics,
                    format!("AI recommends switching to {} for specialized child care.", doctor),
                )
            } else if disease_lower.contains("heart") || disease_lower.contains("cardio") {
                let doctor = &self.cardiology;
                lines.push(format!(
                    "High-risk keywords detected, routed to {} (Cardiology)",
                    doctor
                ));
                (
                    doctor,
                    Specialty::Cardiology,
                    format!("Urgent: {} is the best match for cardiac issues.", doctor),
                )
            } else {
                let doctor = &self.general;
                lines.push(format!("General queue matching optimal for {}", doctor));
                (
                    doctor,
                    Specialty::General,
                    "Scheduling optimal. No reassignment required.".to_string(),
                )
            };

        TriageDecision {
            suggested_doctor: doctor.clone(),
            specialty,
            explanation_lines: lines,
            recommendation,
        }
    }
}
