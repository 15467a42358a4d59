//! Core JWT authentication logic
//!
//! Extracts the bearer token from the Authorization header, validates it
//! against the cached key set and turns the claims into the request identity.

use std::sync::Arc;

use actix_web::{dev::ServiceRequest, http::header};
use tracing::{debug, trace};

use super::JwtConfig;
use crate::{error::MedbaseError, middlewares::AuthenticatedUser, result::MResult};

/// # Returns
/// * `Ok(AuthenticatedUser)` - Authentication successful
/// * `Err(MedbaseError)` - Authentication failed
pub(crate) async fn handle_jwt(
    config: Arc<JwtConfig>,
    req: &ServiceRequest,
) -> MResult<AuthenticatedUser> {
    trace!("JWT Authentication...");

    let identity = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok().map(std::string::ToString::to_string))
        .unwrap_or_default();

    // the key set is fetched on the first request and never refreshed
    config.jwks.load().await?;

    let user_claim = config.decode_bearer_header(&identity)?;

    let username = user_claim
        .username
        .or(user_claim.email)
        .or(user_claim.sub)
        .ok_or_else(|| MedbaseError::InvalidToken("No subject in JWT".to_owned()))?;

    debug!("JWT Access granted to {username}");
    Ok(AuthenticatedUser { username })
}
