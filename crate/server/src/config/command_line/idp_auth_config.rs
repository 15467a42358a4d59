use clap::Args;
use serde::{Deserialize, Serialize};

/// Identity provider settings.
///
/// The provider is a Cognito-style user pool: tokens are verified against the
/// pool's JWKS and credentials are exchanged through its password-grant flow.
/// Authentication is enabled when the region, user pool id and client id are
/// all supplied.
#[derive(Debug, Default, Args, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IdpAuthConfig {
    /// The region of the identity provider user pool, for instance `eu-west-1`
    #[clap(long, env = "MEDBASE_IDP_REGION")]
    pub idp_region: Option<String>,

    /// The identifier of the identity provider user pool
    #[clap(long, env = "MEDBASE_IDP_USER_POOL_ID")]
    pub idp_user_pool_id: Option<String>,

    /// The application client id
    ///
    /// Used as the expected audience of the JWT tokens
    #[clap(long, env = "MEDBASE_IDP_CLIENT_ID")]
    pub idp_client_id: Option<String>,

    /// Override the identity provider endpoint URL
    ///
    /// Defaults to `https://cognito-idp.<region>.amazonaws.com`
    #[clap(long, env = "MEDBASE_IDP_ENDPOINT_URL")]
    pub idp_endpoint_url: Option<String>,

    /// The JWKS (Json Web Key Set) URI of the JWT token
    ///
    /// Defaults to `<issuer>/.well-known/jwks.json` if not set
    #[clap(long, env = "MEDBASE_JWKS_URI")]
    pub jwks_uri: Option<String>,
}
