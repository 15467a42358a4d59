//! Patient endpoints, mounted under the `/patients` scope behind the
//! bearer-token gate.

use std::sync::Arc;

use actix_web::{
    HttpRequest, delete, get, post, put,
    web::{Data, Json, Path},
};
use medbase_server_database::{Patient, PatientCreate, PatientPatch};
use serde_json::{Value, json};
use tracing::info;

use crate::{Medbase, core::patients, result::MResult};

#[post("")]
pub(crate) async fn create_patient(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
    request: Json<PatientCreate>,
) -> MResult<Json<Patient>> {
    info!("POST /patients {}", medbase.get_user(&req));
    Ok(Json(
        patients::create_patient(&medbase, request.into_inner()).await?,
    ))
}

#[get("")]
pub(crate) async fn get_patients(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
) -> MResult<Json<Vec<Patient>>> {
    info!("GET /patients {}", medbase.get_user(&req));
    Ok(Json(patients::list_patients(&medbase).await?))
}

#[get("/{patient_id}")]
pub(crate) async fn get_patient(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
    path: Path<i64>,
) -> MResult<Json<Patient>> {
    let patient_id = path.into_inner();
    info!("GET /patients/{patient_id} {}", medbase.get_user(&req));
    Ok(Json(patients::get_patient(&medbase, patient_id).await?))
}

#[put("/{patient_id}")]
pub(crate) async fn update_patient(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
    path: Path<i64>,
    request: Json<PatientPatch>,
) -> MResult<Json<Patient>> {
    let patient_id = path.into_inner();
    info!("PUT /patients/{patient_id} {}", medbase.get_user(&req));
    Ok(Json(
        patients::update_patient(&medbase, patient_id, request.into_inner()).await?,
    ))
}

#[delete("/{patient_id}")]
pub(crate) async fn delete_patient(
    req: HttpRequest,
    medbase: Data<Arc<Medbase>>,
    path: Path<i64>,
) -> MResult<Json<Value>> {
    let patient_id = path.into_inner();
    info!("DELETE /patients/{patient_id} {}", medbase.get_user(&req));
    patients::delete_patient(&medbase, patient_id).await?;
    Ok(Json(json!({ "message": "Patient deleted successfully" })))
}
