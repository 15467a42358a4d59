//! Hospital endpoints, mounted under the `/hospitals` scope behind the
//! bearer-token gate.

use std::sync::Arc;

use actix_web::{
    HttpRequest, delete, get, post, put,
    web::{Data, Json, Path},
};
use medbase_server_database::{Hospital, HospitalCreate, HospitalPatch, Patient, PatientCreate};
use serde_json::{Value, json};
use tracing::info;

use crate::{Medbase, core::hospitals, result::MResult};

#[post("")]
pub(crate) async fn create_hospital(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
    request: Json<HospitalCreate>,
) -> MResult<Json<Hospital>> {
    info!("POST /hospitals {}", medbase.get_user(&req));
    Ok(Json(
        hospitals::create_hospital(&medbase, request.into_inner()).await?,
    ))
}

#[get("")]
pub(crate) async fn get_hospitals(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
) -> MResult<Json<Vec<Hospital>>> {
    info!("GET /hospitals {}", medbase.get_user(&req));
    Ok(Json(hospitals::list_hospitals(&medbase).await?))
}

#[get("/{hospital_id}")]
pub(crate) async fn get_hospital(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
    path: Path<i64>,
) -> MResult<Json<Hospital>> {
    let hospital_id = path.into_inner();
    info!("GET /hospitals/{hospital_id} {}", medbase.get_user(&req));
    Ok(Json(hospitals::get_hospital(&medbase, hospital_id).await?))
}

#[put("/{hospital_id}")]
pub(crate) async fn update_hospital(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
    path: Path<i64>,
    request: Json<HospitalPatch>,
) -> MResult<Json<Hospital>> {
    let hospital_id = path.into_inner();
    info!("PUT /hospitals/{hospital_id} {}", medbase.get_user(&req));
    Ok(Json(
        hospitals::update_hospital(&medbase, hospital_id, request.into_inner()).await?,
    ))
}

#[delete("/{hospital_id}")]
pub(crate) async fn delete_hospital(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
    path: Path<i64>,
) -> MResult<Json<Value>> {
    let hospital_id = path.into_inner();
    info!("DELETE /hospitals/{hospital_id} {}", medbase.get_user(&req));
    hospitals::delete_hospital(&medbase, hospital_id).await?;
    Ok(Json(json!({ "message": "Hospital deleted successfully" })))
}

#[get("/{hospital_id}/patients")]
pub(crate) async fn get_hospital_patients(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
    path: Path<i64>,
) -> MResult<Json<Vec<Patient>>> {
    let hospital_id = path.into_inner();
    info!(
        "GET /hospitals/{hospital_id}/patients {}",
        medbase.get_user(&req)
    );
    Ok(Json(
        hospitals::hospital_patients(&medbase, hospital_id).await?,
    ))
}

/// Create a patient directly into the hospital
#[post("/{hospital_id}/patients")]
pub(crate) async fn create_hospital_patient(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
    path: Path<i64>,
    request: Json<PatientCreate>,
) -> MResult<Json<Patient>> {
    let hospital_id = path.into_inner();
    info!(
        "POST /hospitals/{hospital_id}/patients {}",
        medbase.get_user(&req)
    );
    Ok(Json(
        hospitals::create_and_assign_patient(&medbase, hospital_id, request.into_inner()).await?,
    ))
}

/// Assign an existing patient to the hospital
#[post("/{hospital_id}/patients/{patient_id}")]
pub(crate) async fn add_patient_to_hospital(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
    path: Path<(i64, i64)>,
) -> MResult<Json<Patient>> {
    let (hospital_id, patient_id) = path.into_inner();
    info!(
        "POST /hospitals/{hospital_id}/patients/{patient_id} {}",
        medbase.get_user(&req)
    );
    Ok(Json(
        hospitals::assign_patient(&medbase, hospital_id, patient_id).await?,
    ))
}
