use std::sync::Arc;

use actix_web::{
    post,
    web::{Data, Json},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Medbase, error::MedbaseError, result::MResult};

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    #[serde(alias = "username")]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Authenticate against the identity provider and return an access token.
///
/// Failed credentials and an unreachable provider both answer 401; a forced
/// password change answers 400 with its own message.
#[post("/token")]
pub(crate) async fn login_for_access_token(
    medbase: Data<Arc<Medbase>>,
    request: Json<LoginRequest>,
) -> MResult<Json<Token>> {
    info!("POST /token {}", request.email);

    let Some(idp) = &medbase.idp else {
        return Err(MedbaseError::Unauthorized(
            "no identity provider is configured".to_owned(),
        ));
    };

    let access_token = idp
        .authenticate(&request.email, &request.password)
        .await?
        .ok_or_else(|| MedbaseError::Unauthorized("Incorrect username or password".to_owned()))?;

    Ok(Json(Token {
        access_token,
        token_type: "bearer".to_owned(),
    }))
}
