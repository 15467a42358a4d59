//! Patient operations.

use medbase_server_database::{Patient, PatientCreate, PatientPatch};
use tracing::trace;

use super::{Medbase, oncology};
use crate::{error::MedbaseError, medbase_ensure, result::MResult};

pub(crate) fn validate_patient(request: &PatientCreate) -> MResult<()> {
    medbase_ensure!(
        !request.name.trim().is_empty(),
        MedbaseError::InvalidRequest("the patient name must not be empty".to_owned())
    );
    oncology::check_consistency(request.oncological, request.cancer_type)
}

pub(crate) async fn create_patient(medbase: &Medbase, request: PatientCreate) -> MResult<Patient> {
    trace!("create_patient: {request:?}");
    validate_patient(&request)?;
    Ok(medbase.db.insert_patient(&request, None).await?)
}

pub(crate) async fn get_patient(medbase: &Medbase, patient_id: i64) -> MResult<Patient> {
    medbase
        .db
        .patient_by_id(patient_id)
        .await?
        .ok_or_else(|| MedbaseError::ItemNotFound(format!("Patient {patient_id} not found")))
}

pub(crate) async fn list_patients(medbase: &Medbase) -> MResult<Vec<Patient>> {
    Ok(medbase.db.list_patients().await?)
}

/// Apply a partial update. The patch is resolved against the stored record
/// and the oncology invariant is checked on the merged result before
/// anything is written, so a failed update leaves the stored state untouched.
pub(crate) async fn update_patient(
    medbase: &Medbase,
    patient_id: i64,
    patch: PatientPatch,
) -> MResult<Patient> {
    trace!("update_patient {patient_id}: {patch:?}");
    let stored = get_patient(medbase, patient_id).await?;
    let merged = oncology::merge_patient(stored, patch)?;
    medbase_ensure!(
        !merged.name.trim().is_empty(),
        MedbaseError::InvalidRequest("the patient name must not be empty".to_owned())
    );
    medbase.db.update_patient(&merged).await?;
    Ok(merged)
}

pub(crate) async fn delete_patient(medbase: &Medbase, patient_id: i64) -> MResult<()> {
    let deleted = medbase.db.delete_patient(patient_id).await?;
    medbase_ensure!(
        deleted,
        MedbaseError::ItemNotFound(format!("Patient {patient_id} not found"))
    );
    Ok(())
}
