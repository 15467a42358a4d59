use async_trait::async_trait;

use crate::{
    error::DbResult,
    records::{Hospital, HospitalCreate, Patient, PatientCreate},
};

mod sql;
pub use sql::{PgPool, SqlitePool};

/// Repository over the hospitals table.
///
/// Lookups report absence with `Option`, deletes report whether a row
/// existed with `bool`; no business rule is enforced here.
#[async_trait(?Send)]
pub trait HospitalStore {
    async fn insert_hospital(&self, create: &HospitalCreate) -> DbResult<Hospital>;

    async fn hospital_by_id(&self, hospital_id: i64) -> DbResult<Option<Hospital>>;

    async fn list_hospitals(&self) -> DbResult<Vec<Hospital>>;

    /// Overwrite the stored fields with the fully resolved record.
    async fn update_hospital(&self, hospital: &Hospital) -> DbResult<()>;

    async fn delete_hospital(&self, hospital_id: i64) -> DbResult<bool>;

    /// Number of patients currently assigned to the hospital.
    async fn patient_count(&self, hospital_id: i64) -> DbResult<i64>;
}

/// Repository over the patients table.
#[async_trait(?Send)]
pub trait PatientStore {
    async fn insert_patient(
        &self,
        create: &PatientCreate,
        hospital_id: Option<i64>,
    ) -> DbResult<Patient>;

    async fn patient_by_id(&self, patient_id: i64) -> DbResult<Option<Patient>>;

    async fn list_patients(&self) -> DbResult<Vec<Patient>>;

    async fn patients_by_hospital(&self, hospital_id: i64) -> DbResult<Vec<Patient>>;

    /// Overwrite the stored fields with the fully resolved record.
    async fn update_patient(&self, patient: &Patient) -> DbResult<()>;

    /// Point the patient at a hospital (or at none).
    async fn set_patient_hospital(
        &self,
        patient_id: i64,
        hospital_id: Option<i64>,
    ) -> DbResult<()>;

    async fn delete_patient(&self, patient_id: i64) -> DbResult<bool>;
}

/// The store handle the server owns: both repositories behind one object.
pub trait Database: HospitalStore + PatientStore {}

impl<T: HospitalStore + PatientStore> Database for T {}
