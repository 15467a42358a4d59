mod jwt;
pub(crate) use jwt::{JwksManager, JwtAuth, JwtConfig, UserClaim};

/// The identity attached to a request once it passed the authentication gate.
#[derive(Debug, Clone)]
pub(crate) struct AuthenticatedUser {
    pub(crate) username: String,
}
