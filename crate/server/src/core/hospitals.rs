//! Hospital operations: CRUD plus the capacity-constrained assignment of
//! patients.

use medbase_server_database::{Hospital, HospitalCreate, HospitalPatch, Patient, PatientCreate};
use tracing::{debug, trace};

use super::{Medbase, patients};
use crate::{error::MedbaseError, medbase_ensure, result::MResult};

fn validate_hospital(name: &str, capacity: i64) -> MResult<()> {
    medbase_ensure!(
        !name.trim().is_empty(),
        MedbaseError::InvalidRequest("the hospital name must not be empty".to_owned())
    );
    medbase_ensure!(
        capacity >= 0,
        MedbaseError::InvalidRequest("the hospital capacity must not be negative".to_owned())
    );
    Ok(())
}

pub(crate) async fn create_hospital(
    medbase: &Medbase,
    request: HospitalCreate,
) -> MResult<Hospital> {
    trace!("create_hospital: {request:?}");
    validate_hospital(&request.name, request.capacity)?;
    Ok(medbase.db.insert_hospital(&request).await?)
}

pub(crate) async fn get_hospital(medbase: &Medbase, hospital_id: i64) -> MResult<Hospital> {
    medbase
        .db
        .hospital_by_id(hospital_id)
        .await?
        .ok_or_else(|| MedbaseError::ItemNotFound(format!("Hospital {hospital_id} not found")))
}

pub(crate) async fn list_hospitals(medbase: &Medbase) -> MResult<Vec<Hospital>> {
    Ok(medbase.db.list_hospitals().await?)
}

pub(crate) async fn update_hospital(
    medbase: &Medbase,
    hospital_id: i64,
    patch: HospitalPatch,
) -> MResult<Hospital> {
    trace!("update_hospital {hospital_id}: {patch:?}");
    let stored = get_hospital(medbase, hospital_id).await?;
    let merged = Hospital {
        id: stored.id,
        name: patch.name.unwrap_or(stored.name),
        address: patch.address.unwrap_or(stored.address),
        capacity: patch.capacity.unwrap_or(stored.capacity),
        current_patients: stored.current_patients,
    };
    validate_hospital(&merged.name, merged.capacity)?;
    medbase.db.update_hospital(&merged).await?;
    // read back so the derived patient count stays fresh
    get_hospital(medbase, hospital_id).await
}

pub(crate) async fn delete_hospital(medbase: &Medbase, hospital_id: i64) -> MResult<()> {
    let deleted = medbase.db.delete_hospital(hospital_id).await?;
    medbase_ensure!(
        deleted,
        MedbaseError::ItemNotFound(format!("Hospital {hospital_id} not found"))
    );
    Ok(())
}

pub(crate) async fn hospital_patients(
    medbase: &Medbase,
    hospital_id: i64,
) -> MResult<Vec<Patient>> {
    // verify the hospital exists
    get_hospital(medbase, hospital_id).await?;
    Ok(medbase.db.patients_by_hospital(hospital_id).await?)
}

/// Assign an existing patient to a hospital.
///
/// A patient already assigned to the target hospital is rejected; a patient
/// assigned elsewhere is silently transferred. There is no locking around the
/// capacity check: two concurrent assignments may both pass it and overrun
/// the capacity (the store does not enforce it).
pub(crate) async fn assign_patient(
    medbase: &Medbase,
    hospital_id: i64,
    patient_id: i64,
) -> MResult<Patient> {
    let hospital = get_hospital(medbase, hospital_id).await?;
    let patient = patients::get_patient(medbase, patient_id).await?;

    medbase_ensure!(
        patient.hospital_id != Some(hospital.id),
        MedbaseError::AlreadyAssigned
    );

    let count = medbase.db.patient_count(hospital.id).await?;
    // `>=` so that a capacity-0 hospital never accepts a patient
    medbase_ensure!(count < hospital.capacity, MedbaseError::CapacityExceeded);

    medbase
        .db
        .set_patient_hospital(patient.id, Some(hospital.id))
        .await?;
    debug!("patient {} assigned to hospital {}", patient.id, hospital.id);

    patients::get_patient(medbase, patient_id).await
}

/// Create a patient directly into a hospital, subject to the same capacity
/// rule as an assignment.
pub(crate) async fn create_and_assign_patient(
    medbase: &Medbase,
    hospital_id: i64,
    request: PatientCreate,
) -> MResult<Patient> {
    let hospital = get_hospital(medbase, hospital_id).await?;
    patients::validate_patient(&request)?;

    let count = medbase.db.patient_count(hospital.id).await?;
    medbase_ensure!(count < hospital.capacity, MedbaseError::CapacityExceeded);

    Ok(medbase.db.insert_patient(&request, Some(hospital.id)).await?)
}
