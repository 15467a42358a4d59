use crate::{config::IdpAuthConfig, medbase_bail, result::MResult};

/// Resolved identity provider parameters.
#[derive(Debug, Clone)]
pub struct IdpParams {
    /// The expected `iss` claim of the JWT tokens
    pub issuer_uri: String,
    /// Where the provider publishes its JSON Web Key Set
    pub jwks_uri: String,
    /// The application client id, expected as the `aud` claim
    pub client_id: String,
    /// The endpoint the password-grant flow is exchanged against
    pub auth_endpoint_url: String,
}

impl IdpParams {
    /// Resolve the identity provider parameters from the command line
    /// configuration. Returns `None` when authentication is not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if only part of the region/user pool/client id
    /// triplet is supplied.
    pub(crate) fn try_from_config(config: &IdpAuthConfig) -> MResult<Option<Self>> {
        match (
            &config.idp_region,
            &config.idp_user_pool_id,
            &config.idp_client_id,
        ) {
            (None, None, None) => Ok(None),
            (Some(region), Some(user_pool_id), Some(client_id)) => {
                let endpoint = config.idp_endpoint_url.clone().unwrap_or_else(|| {
                    format!("https://cognito-idp.{region}.amazonaws.com")
                });
                let endpoint = endpoint.trim_end_matches('/').to_owned();
                let issuer_uri = format!("{endpoint}/{user_pool_id}");
                let jwks_uri = config
                    .jwks_uri
                    .clone()
                    .unwrap_or_else(|| format!("{issuer_uri}/.well-known/jwks.json"));
                Ok(Some(Self {
                    issuer_uri,
                    jwks_uri,
                    client_id: client_id.clone(),
                    auth_endpoint_url: endpoint,
                }))
            }
            _ => medbase_bail!(
                "Incomplete identity provider configuration: the region, user pool id and client \
                 id must all be supplied"
            ),
        }
    }
}
