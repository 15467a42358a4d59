//! Identity provider client
//!
//! Wraps the provider's password-grant flow (a Cognito-style `InitiateAuth`
//! call with `USER_PASSWORD_AUTH`). Token verification does not go through
//! here; that is the job of the JWT middleware.

use reqwest::header::CONTENT_TYPE;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::{config::IdpParams, error::MedbaseError, result::MResult};

const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";

pub(crate) struct IdpClient {
    auth_endpoint_url: String,
    client_id: String,
    client: reqwest::Client,
}

impl IdpClient {
    pub(crate) fn new(params: &IdpParams) -> Self {
        Self {
            auth_endpoint_url: params.auth_endpoint_url.clone(),
            client_id: params.client_id.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// Exchange a username/password pair for an access token.
    ///
    /// Returns `Ok(None)` when the provider rejects the credentials or cannot
    /// be reached: callers must treat absence as a failed authentication. A
    /// forced password change is the one provider answer that surfaces as an
    /// error of its own.
    ///
    /// # Errors
    ///
    /// Fails with `PasswordChangeRequired` when the provider answers with a
    /// `NEW_PASSWORD_REQUIRED` challenge.
    pub(crate) async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> MResult<Option<String>> {
        let body = json!({
            "AuthFlow": "USER_PASSWORD_AUTH",
            "ClientId": self.client_id,
            "AuthParameters": {
                "USERNAME": username,
                "PASSWORD": password,
            }
        });

        let response = match self
            .client
            .post(&self.auth_endpoint_url)
            .header(CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("X-Amz-Target", INITIATE_AUTH_TARGET)
            .body(body.to_string())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("identity provider unreachable: {e}");
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            debug!(
                "identity provider rejected the authentication: {}",
                response.status()
            );
            return Ok(None);
        }

        let value = match response.json::<Value>().await {
            Ok(value) => value,
            Err(e) => {
                warn!("unreadable identity provider response: {e}");
                return Ok(None);
            }
        };

        parse_auth_response(&value)
    }
}

/// Extract the access token from an `InitiateAuth` answer.
pub(crate) fn parse_auth_response(value: &Value) -> MResult<Option<String>> {
    if value.get("ChallengeName").and_then(Value::as_str) == Some("NEW_PASSWORD_REQUIRED") {
        return Err(MedbaseError::PasswordChangeRequired(
            "You need to change your password.".to_owned(),
        ));
    }
    Ok(value
        .pointer("/AuthenticationResult/AccessToken")
        .and_then(Value::as_str)
        .map(std::borrow::ToOwned::to_owned))
}
