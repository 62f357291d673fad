use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use tokio::sync::Mutex;
use tracing::{debug, info};

use shared_database::store::{self, StoreTransaction};
use shared_database::{ClinicStore, StoreError};
use shared_models::appointment::{Appointment, NewAppointment};
use shared_utils::random::RandomSource;

use crate::error::QueueError;
use crate::models::{
    Admission, QueueSlot, CONSULT_WINDOW_MINUTES, SCORE_STEP_MAX, SCORE_STEP_MIN,
    SLOT_CADENCE_MINUTES, TOP_SCORE,
};

/// Keeps the appointment table bounded to the most recent `max_size`
/// patients and produces the ordered queue view.
pub struct QueueMaintainer {
    store: ClinicStore,
    max_size: i64,
    random: Arc<dyn RandomSource>,
    // Serializes insert + evict within this process; the transaction makes
    // the pair atomic against readers.
    admission: Mutex<()>,
}

impl QueueMaintainer {
    pub fn new(
        store: ClinicStore,
        max_size: i64,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self, QueueError> {
        if max_size < 1 {
            return Err(QueueError::InvalidCapacity(max_size));
        }

        Ok(Self {
            store,
            max_size,
            random,
            admission: Mutex::new(()),
        })
    }

    pub fn store(&self) -> &ClinicStore {
        &self.store
    }

    /// Persists the appointment, evicts the oldest rows beyond capacity and
    /// returns the refreshed queue view. The view is only built once the
    /// insert and evictions have committed.
    pub async fn admit(
        &self,
        new: &NewAppointment,
        now: NaiveDateTime,
    ) -> Result<Admission, QueueError> {
        let (appointment, evicted_ids) = {
            let _guard = self.admission.lock().await;

            let mut tx = self.store.begin().await?;
            let appointment = store::insert_appointment(&mut tx, new).await?;
            let evicted = evict_over_capacity(&mut tx, self.max_size).await?;
            tx.commit().await.map_err(StoreError::from)?;

            (appointment, evicted)
        };

        if !evicted_ids.is_empty() {
            info!(
                "Queue over capacity ({}), evicted appointments {:?}",
                self.max_size, evicted_ids
            );
        }

        let live_queue = self.live_queue(now).await?;
        debug!(
            "Admitted appointment {} for {}; {} in queue",
            appointment.id,
            appointment.patient_name,
            live_queue.len()
        );

        Ok(Admission {
            appointment,
            evicted_ids,
            live_queue,
        })
    }

    /// Runs the eviction loop on its own, e.g. after lowering the capacity.
    pub async fn enforce_cap(&self) -> Result<Vec<i64>, QueueError> {
        let _guard = self.admission.lock().await;

        let mut tx = self.store.begin().await?;
        let evicted = evict_over_capacity(&mut tx, self.max_size).await?;
        tx.commit().await.map_err(StoreError::from)?;

        Ok(evicted)
    }

    pub async fn live_queue(&self, now: NaiveDateTime) -> Result<Vec<QueueSlot>, QueueError> {
        let appointments = self.store.list_appointments_oldest_first().await?;
        Ok(build_schedule(&appointments, self.random.as_ref(), now))
    }
}

async fn evict_over_capacity(
    tx: &mut StoreTransaction,
    max_size: i64,
) -> Result<Vec<i64>, QueueError> {
    let mut evicted = Vec::new();

    while store::count_appointments(tx).await? > max_size {
        match store::delete_oldest_appointment(tx).await? {
            Some(id) => evicted.push(id),
            None => break,
        }
    }

    Ok(evicted)
}

/// Scores and consultation windows for `appointments`, which must already be
/// ordered oldest first. Windows are laid out from `now` on every call.
pub fn build_schedule(
    appointments: &[Appointment],
    random: &dyn RandomSource,
    now: NaiveDateTime,
) -> Vec<QueueSlot> {
    let mut score = TOP_SCORE;
    let mut starts_at = now;
    let mut slots = Vec::with_capacity(appointments.len());

    for appointment in appointments {
        slots.push(QueueSlot {
            appointment_id: appointment.id,
            name: appointment.patient_name.clone(),
            score,
            starts_at,
            ends_at: starts_at + Duration::minutes(CONSULT_WINDOW_MINUTES),
        });

        score -= random.between(SCORE_STEP_MIN, SCORE_STEP_MAX);
        starts_at += Duration::minutes(SLOT_CADENCE_MINUTES);
    }

    slots
}

#[cfg(test)]
mod tests {
    use shared_utils::test_utils::{clinic_morning, highest, lowest, FixedRandom};

    use super::*;

    fn appointments(names: &[&str]) -> Vec<Appointment> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Appointment {
                id: i as i64 + 1,
                patient_name: name.to_string(),
                phone_number: "9876543210".to_string(),
                patient_age: 40,
                disease: "flu".to_string(),
                doctor_name: "Dr. Patel".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_empty_queue_has_no_slots() {
        assert!(build_schedule(&[], &FixedRandom(5), clinic_morning()).is_empty());
    }

    #[test]
    fn test_scores_step_down_from_top() {
        let slots = build_schedule(&appointments(&["a", "b", "c"]), &FixedRandom(6), clinic_morning());
        let scores: Vec<i64> = slots.iter().map(|s| s.score).collect();

        assert_eq!(scores, vec![95, 89, 83]);
    }

    #[test]
    fn test_score_steps_stay_within_bounds() {
        let names = ["a", "b", "c", "d", "e", "f"];

        let low = build_schedule(&appointments(&names), &lowest(), clinic_morning());
        let high = build_schedule(&appointments(&names), &highest(), clinic_morning());

        assert_eq!(low.last().map(|s| s.score), Some(95 - 5 * 4));
        assert_eq!(high.last().map(|s| s.score), Some(95 - 5 * 10));
    }

    #[test]
    fn test_scores_are_not_clamped_at_zero() {
        let names: Vec<String> = (0..15).map(|i| format!("p{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();

        let slots = build_schedule(&appointments(&refs), &highest(), clinic_morning());

        assert_eq!(slots.last().map(|s| s.score), Some(95 - 14 * 10));
        assert!(slots.last().map(|s| s.score < 0).unwrap_or(false));
    }

    #[test]
    fn test_windows_follow_twelve_minute_cadence() {
        let now = clinic_morning();
        let slots = build_schedule(&appointments(&["a", "b", "c"]), &FixedRandom(5), now);

        for (idx, slot) in slots.iter().enumerate() {
            assert_eq!(slot.starts_at, now + Duration::minutes(idx as i64 * 12));
            assert_eq!(slot.ends_at - slot.starts_at, Duration::minutes(10));
        }

        let entries: Vec<_> = slots.iter().map(QueueSlot::to_entry).collect();
        assert_eq!(entries[0].start_time, "09:00 AM");
        assert_eq!(entries[0].end_time, "09:10 AM");
        assert_eq!(entries[2].start_time, "09:24 AM");
        assert_eq!(entries[2].end_time, "09:34 AM");
    }
}
