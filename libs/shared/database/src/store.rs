//! Users and appointments.
//!
//! Appointment operations exist both as free functions over a
//! `SqliteConnection` (so several can share one transaction) and as
//! `ClinicStore` methods that each run in their own implicit transaction.

use sqlx::sqlite::{SqliteConnection, SqlitePool, SqliteRow};
use sqlx::{Row, Sqlite, Transaction};
use tracing::debug;

use shared_models::appointment::{Appointment, NewAppointment};
use shared_models::auth::User;

use crate::error::StoreError;

/// Transaction handle accepted by the appointment free functions.
pub type StoreTransaction = Transaction<'static, Sqlite>;

#[derive(Debug, Clone)]
pub struct ClinicStore {
    pool: SqlitePool,
}

impl ClinicStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn begin(&self) -> Result<StoreTransaction, StoreError> {
        Ok(self.pool.begin().await?)
    }

    /// Fails with `DuplicateUsername` when the unique constraint rejects the row.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<User, StoreError> {
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?1, ?2)")
            .bind(username)
            .bind(password)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => {
                debug!("Created user {} with id {}", username, done.last_insert_rowid());
                Ok(User {
                    id: done.last_insert_rowid(),
                    username: username.to_string(),
                    password: password.to_string(),
                })
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::DuplicateUsername(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_user(&self, username: &str, password: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            "SELECT id, username, password FROM users WHERE username = ?1 AND password = ?2",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| user_from_row(&r)).transpose()
    }

    pub async fn count_users(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn create_appointment(&self, new: &NewAppointment) -> Result<Appointment, StoreError> {
        let mut conn = self.pool.acquire().await?;
        insert_appointment(&mut conn, new).await
    }

    pub async fn count_appointments(&self) -> Result<i64, StoreError> {
        let mut conn = self.pool.acquire().await?;
        count_appointments(&mut conn).await
    }

    pub async fn delete_oldest_appointment(&self) -> Result<Option<i64>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        delete_oldest_appointment(&mut conn).await
    }

    pub async fn list_appointments_oldest_first(&self) -> Result<Vec<Appointment>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        list_appointments_oldest_first(&mut conn).await
    }
}

pub async fn insert_appointment(
    conn: &mut SqliteConnection,
    new: &NewAppointment,
) -> Result<Appointment, StoreError> {
    let done = sqlx::query(
        "INSERT INTO appointments (patient_name, phone_number, patient_age, disease, doctor_name)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&new.patient_name)
    .bind(&new.phone_number)
    .bind(new.patient_age)
    .bind(&new.disease)
    .bind(&new.doctor_name)
    .execute(&mut *conn)
    .await?;

    let id = done.last_insert_rowid();
    debug!("Stored appointment {} for {}", id, new.patient_name);

    Ok(Appointment {
        id,
        patient_name: new.patient_name.clone(),
        phone_number: new.phone_number.clone(),
        patient_age: new.patient_age,
        disease: new.disease.clone(),
        doctor_name: new.doctor_name.clone(),
    })
}

pub async fn count_appointments(conn: &mut SqliteConnection) -> Result<i64, StoreError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM appointments")
        .fetch_one(&mut *conn)
        .await?;
    Ok(count)
}

/// Removes the lowest-id appointment, returning its id. `None` when the table is empty.
pub async fn delete_oldest_appointment(conn: &mut SqliteConnection) -> Result<Option<i64>, StoreError> {
    let oldest = sqlx::query_scalar::<_, i64>("SELECT id FROM appointments ORDER BY id ASC LIMIT 1")
        .fetch_optional(&mut *conn)
        .await?;

    if let Some(id) = oldest {
        sqlx::query("DELETE FROM appointments WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        debug!("Deleted oldest appointment {}", id);
    }

    Ok(oldest)
}

pub async fn list_appointments_oldest_first(
    conn: &mut SqliteConnection,
) -> Result<Vec<Appointment>, StoreError> {
    let rows = sqlx::query(
        "SELECT id, patient_name, phone_number, patient_age, disease, doctor_name
         FROM appointments ORDER BY id ASC",
    )
    .fetch_all(&mut *conn)
    .await?;

    rows.iter().map(appointment_from_row).collect()
}

fn user_from_row(row: &SqliteRow) -> Result<User, StoreError> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        password: row.try_get("password")?,
    })
}

fn appointment_from_row(row: &SqliteRow) -> Result<Appointment, StoreError> {
    Ok(Appointment {
        id: row.try_get("id")?,
        patient_name: row.try_get("patient_name")?,
        phone_number: row.try_get("phone_number")?,
        patient_age: row.try_get("patient_age")?,
        disease: row.try_get("disease")?,
        doctor_name: row.try_get("doctor_name")?,
    })
}
