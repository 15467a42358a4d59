use std::{path::Path, str::FromStr};

use async_trait::async_trait;
use sqlx::{
    ConnectOptions, Pool, Row, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
};
use tracing::debug;

use super::{SQLITE_QUERIES, get_query};
use crate::{
    error::{DbError, DbResult, DbResultHelper},
    records::{CancerType, Hospital, HospitalCreate, Patient, PatientCreate},
    store::{HospitalStore, PatientStore},
};

/// `SQLite` store, used by the test suite and single-node deployments
#[derive(Clone)]
pub struct SqlitePool {
    pool: Pool<Sqlite>,
}

impl SqlitePool {
    /// Instantiate a new `SQLite` store
    /// and create the appropriate table(s) if need be
    pub async fn instantiate(path: &Path, clear_database: bool) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            // the patients table carries an ON DELETE SET NULL reference
            .foreign_keys(true)
            // disable logging of each query
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .context("failed to open the SQLite database")?;

        sqlx::query(get_query(&SQLITE_QUERIES, "create-table-hospitals")?)
            .execute(&pool)
            .await?;

        sqlx::query(get_query(&SQLITE_QUERIES, "create-table-patients")?)
            .execute(&pool)
            .await?;

        if clear_database {
            debug!("clearing the SQLite database");
            sqlx::query(get_query(&SQLITE_QUERIES, "clean-table-patients")?)
                .execute(&pool)
                .await?;
            sqlx::query(get_query(&SQLITE_QUERIES, "clean-table-hospitals")?)
                .execute(&pool)
                .await?;
        }

        Ok(Self { pool })
    }
}

fn hospital_from_row(row: &SqliteRow) -> DbResult<Hospital> {
    Ok(Hospital {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        capacity: row.try_get("capacity")?,
        current_patients: row.try_get("current_patients")?,
    })
}

fn patient_from_row(row: &SqliteRow) -> DbResult<Patient> {
    let cancer_type = row
        .try_get::<Option<String>, _>("cancer_type")?
        .map(|s| {
            CancerType::from_str(&s)
                .map_err(|e| DbError::ConversionError(format!("unknown cancer type `{s}`: {e}")))
        })
        .transpose()?;
    Ok(Patient {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
        birth_date: row.try_get("birth_date")?,
        oncological: row.try_get("oncological")?,
        cancer_type,
        hospital_id: row.try_get("hospital_id")?,
    })
}

#[async_trait(?Send)]
impl HospitalStore for SqlitePool {
    async fn insert_hospital(&self, create: &HospitalCreate) -> DbResult<Hospital> {
        let row = sqlx::query(get_query(&SQLITE_QUERIES, "insert-hospital")?)
            .bind(&create.name)
            .bind(&create.address)
            .bind(create.capacity)
            .fetch_one(&self.pool)
            .await?;
        Ok(Hospital {
            id: row.try_get("id")?,
            name: create.name.clone(),
            address: create.address.clone(),
            capacity: create.capacity,
            current_patients: 0,
        })
    }

    async fn hospital_by_id(&self, hospital_id: i64) -> DbResult<Option<Hospital>> {
        sqlx::query(get_query(&SQLITE_QUERIES, "select-hospital")?)
            .bind(hospital_id)
            .fetch_optional(&self.pool)
            .await?
            .map(|row| hospital_from_row(&row))
            .transpose()
    }

    async fn list_hospitals(&self) -> DbResult<Vec<Hospital>> {
        sqlx::query(get_query(&SQLITE_QUERIES, "select-all-hospitals")?)
            .fetch_all(&self.pool)
            .await?
            .iter()
            .map(hospital_from_row)
            .collect()
    }

    async fn update_hospital(&self, hospital: &Hospital) -> DbResult<()> {
        sqlx::query(get_query(&SQLITE_QUERIES, "update-hospital")?)
            .bind(&hospital.name)
            .bind(&hospital.address)
            .bind(hospital.capacity)
            .bind(hospital.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_hospital(&self, hospital_id: i64) -> DbResult<bool> {
        let result = sqlx::query(get_query(&SQLITE_QUERIES, "delete-hospital")?)
            .bind(hospital_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn patient_count(&self, hospital_id: i64) -> DbResult<i64> {
        let row = sqlx::query(get_query(&SQLITE_QUERIES, "count-patients-of-hospital")?)
            .bind(hospital_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get(0)?)
    }
}

#[async_trait(?Send)]
impl PatientStore for SqlitePool {
    async fn insert_patient(
        &self,
        create: &PatientCreate,
        hospital_id: Option<i64>,
    ) -> DbResult<Patient> {
        let row = sqlx::query(get_query(&SQLITE_QUERIES, "insert-patient")?)
            .bind(&create.name)
            .bind(create.age)
            .bind(create.birth_date)
            .bind(create.oncological)
            .bind(create.cancer_type.map(|c| c.to_string()))
            .bind(hospital_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(Patient {
            id: row.try_get("id")?,
            name: create.name.clone(),
            age: create.age,
            birth_date: create.birth_date,
            oncological: create.oncological,
            cancer_type: create.cancer_type,
            hospital_id,
        })
    }

    async fn patient_by_id(&self, patient_id: i64) -> DbResult<Option<Patient>> {
        sqlx::query(get_query(&SQLITE_QUERIES, "select-patient")?)
            .bind(patient_id)
            .fetch_optional(&self.pool)
            .await?
            .map(|row| patient_from_row(&row))
            .transpose()
    }

    async fn list_patients(&self) -> DbResult<Vec<Patient>> {
        sqlx::query(get_query(&SQLITE_QUERIES, "select-all-patients")?)
            .fetch_all(&self.pool)
            .await?
            .iter()
            .map(patient_from_row)
            .collect()
    }

    async fn patients_by_hospital(&self, hospital_id: i64) -> DbResult<Vec<Patient>> {
        sqlx::query(get_query(&SQLITE_QUERIES, "select-patients-of-hospital")?)
            .bind(hospital_id)
            .fetch_all(&self.pool)
            .await?
            .iter()
            .map(patient_from_row)
            .collect()
    }

    async fn update_patient(&self, patient: &Patient) -> DbResult<()> {
        sqlx::query(get_query(&SQLITE_QUERIES, "update-patient")?)
            .bind(&patient.name)
            .bind(patient.age)
            .bind(patient.birth_date)
            .bind(patient.oncological)
            .bind(patient.cancer_type.map(|c| c.to_string()))
            .bind(patient.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn set_patient_hospital(
        &self,
        patient_id: i64,
        hospital_id: Option<i64>,
    ) -> DbResult<()> {
        sqlx::query(get_query(&SQLITE_QUERIES, "set-patient-hospital")?)
            .bind(hospital_id)
            .bind(patient_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_patient(&self, patient_id: i64) -> DbResult<bool> {
        let result = sqlx::query(get_query(&SQLITE_QUERIES, "delete-patient")?)
            .bind(patient_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
