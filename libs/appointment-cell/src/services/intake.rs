use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::info;

use booking_queue_cell::QueueMaintainer;
use doctor_cell::DoctorDirectory;
use shared_models::appointment::NewAppointment;
use shared_models::error::AppError;
use shared_utils::random::RandomSource;
use shared_utils::time::clock_time;

use crate::models::PredictionResponse;
use crate::services::estimate::WaitEstimate;
use crate::services::triage::TriageRouter;

/// Intake flow behind `/predict/`: persist and trim the queue, triage, then
/// assemble the response.
pub struct IntakeService {
    queue: Arc<QueueMaintainer>,
    triage: TriageRouter,
    directory: Arc<DoctorDirectory>,
    random: Arc<dyn RandomSource>,
}

impl IntakeService {
    pub fn new(
        queue: Arc<QueueMaintainer>,
        triage: TriageRouter,
        directory: Arc<DoctorDirectory>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            queue,
            triage,
            directory,
            random,
        }
    }

    pub async fn predict(
        &self,
        request: &NewAppointment,
        now: NaiveDateTime,
    ) -> Result<PredictionResponse, AppError> {
        let admission = self.queue.admit(request, now).await?;

        let decision = self.triage.route(&request.disease, request.patient_age);
        let estimate = WaitEstimate::draw(self.random.as_ref(), now);
        let status = self.directory.status_of(&request.doctor_name);

        info!(
            "Intake {} for {}: suggested {}, wait {} min",
            admission.appointment.id,
            request.patient_name,
            decision.suggested_doctor,
            estimate.wait_minutes
        );

        Ok(PredictionResponse {
            load: estimate.load,
            status,
            queue: estimate.queue_position,
            wait: estimate.wait_minutes,
            arrival_time: clock_time(&estimate.arrival),
            consult: estimate.consult_minutes,
            recommend: decision.recommendation.clone(),
            explain: decision.explanation(),
            suggested_doctor: decision.suggested_doctor,
            live_queue: admission.live_queue_entries(),
        })
    }
}
