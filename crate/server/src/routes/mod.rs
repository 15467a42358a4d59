use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use crate::error::MedbaseError;

pub(crate) mod auth;
pub(crate) mod health;
pub(crate) mod hospitals;
pub(crate) mod patients;

impl actix_web::error::ResponseError for MedbaseError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ItemNotFound(_) => StatusCode::NOT_FOUND,

            Self::Unauthorized(_) | Self::InvalidToken(_) | Self::ExpiredToken => {
                StatusCode::UNAUTHORIZED
            }

            Self::PasswordChangeRequired(_)
            | Self::CapacityExceeded
            | Self::AlreadyAssigned
            | Self::InconsistentOncologyData(_)
            | Self::InvalidRequest(_)
            | Self::DatabaseIntegrity(_) => StatusCode::BAD_REQUEST,

            Self::DatabaseError(_) | Self::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let message = self.to_string();

        if status_code >= StatusCode::INTERNAL_SERVER_ERROR {
            error!("{status_code} - {message}");
        } else {
            warn!("{status_code} - {message}");
        }

        HttpResponseBuilder::new(status_code).json(json!({ "detail": message }))
    }
}
