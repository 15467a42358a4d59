use std::sync::Arc;

use alcoholic_jwt::token_kid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::JwksManager;
use crate::{error::MedbaseError, medbase_ensure, result::MResult};

#[derive(Clone)]
pub(crate) struct JwtConfig {
    /// The expected `iss` claim
    pub jwt_issuer_uri: String,
    /// The expected `aud` claim: the application client id
    pub jwt_audience: String,
    pub jwks: Arc<JwksManager>,
}

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct UserClaim {
    pub email: Option<String>,
    /// Cognito-style access tokens carry the user name in this claim
    #[serde(alias = "cognito:username")]
    pub username: Option<String>,
    pub iss: Option<String>,
    pub sub: Option<String>,
    pub aud: Option<String>,
    pub iat: Option<i64>,
    pub exp: Option<i64>,
    pub nbf: Option<i64>,
    pub jti: Option<String>,
    pub token_use: Option<String>,
}

impl JwtConfig {
    /// Decode a JWT bearer header
    pub(crate) fn decode_bearer_header(&self, authorization_content: &str) -> MResult<UserClaim> {
        let bearer: Vec<&str> = authorization_content.splitn(2, ' ').collect();
        medbase_ensure!(
            bearer.len() == 2 && bearer[0] == "Bearer",
            MedbaseError::Unauthorized("Bad authorization header content (bad bearer)".to_owned())
        );

        self.decode_authentication_token(bearer[1])
    }

    /// Decode a json web token (JWT)
    pub(crate) fn decode_authentication_token(&self, token: &str) -> MResult<UserClaim> {
        medbase_ensure!(
            !token.is_empty(),
            MedbaseError::InvalidToken("token is empty".to_owned())
        );
        tracing::trace!(
            "expected JWT issuer: {}, audience: {}",
            self.jwt_issuer_uri,
            self.jwt_audience
        );

        let validations = vec![
            alcoholic_jwt::Validation::Issuer(self.jwt_issuer_uri.clone()),
            alcoholic_jwt::Validation::Audience(self.jwt_audience.clone()),
            alcoholic_jwt::Validation::SubjectPresent,
        ];

        // If a JWKS contains multiple keys, the correct KID first
        // needs to be fetched from the token headers.
        let kid = token_kid(token)
            .map_err(|_| MedbaseError::InvalidToken("Failed to decode token headers".to_owned()))?
            .ok_or_else(|| {
                MedbaseError::InvalidToken("No 'kid' claim present in token".to_owned())
            })?;

        let jwk = self.jwks.find(&kid)?.ok_or_else(|| {
            MedbaseError::InvalidToken("Specified key not found in set".to_owned())
        })?;

        let valid_jwt = alcoholic_jwt::validate(token, &jwk, validations)
            .map_err(|err| MedbaseError::InvalidToken(format!("Cannot validate token: {err:?}")))?;

        let payload: UserClaim = serde_json::from_value(valid_jwt.claims)
            .map_err(|err| MedbaseError::InvalidToken(format!("JWT claims is malformed: {err:?}")))?;

        // Expiry is checked here rather than through the validation list so
        // that an expired token is reported distinctly from an invalid one.
        let exp = payload.exp.ok_or_else(|| {
            MedbaseError::InvalidToken("No 'exp' claim present in token".to_owned())
        })?;
        medbase_ensure!(exp > Utc::now().timestamp(), MedbaseError::ExpiredToken);

        Ok(payload)
    }
}
