use actix_web::{get, web::Json};
use serde_json::{Value, json};

/// Root endpoint of the Medbase API
#[get("/")]
pub(crate) async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Medbase API" }))
}

/// Liveness endpoint used by deployment probes
#[get("/health")]
pub(crate) async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "up",
        "message": "Service is running"
    }))
}
