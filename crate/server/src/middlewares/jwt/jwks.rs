//! JWKS (JSON Web Key Set) Manager
//!
//! Holds the identity provider's public signing keys. The key set is fetched
//! lazily on the first verification and cached for the life of the process:
//! there is no refresh or expiry, so a key rotation on the provider side is
//! only observed after a restart.

use std::sync::RwLock;

use alcoholic_jwt::{JWK, JWKS};
use tracing::info;

use crate::{
    error::MedbaseError,
    medbase_error,
    result::{MResult, MResultHelper},
};

#[derive(Debug)]
pub(crate) struct JwksManager {
    uri: String,
    jwks: RwLock<Option<JWKS>>,
}

impl JwksManager {
    pub(crate) const fn new(uri: String) -> Self {
        Self {
            uri,
            jwks: RwLock::new(None),
        }
    }

    /// Build a manager around an already fetched key set; used by the tests.
    #[cfg(test)]
    pub(crate) const fn preloaded(jwks: JWKS) -> Self {
        Self {
            uri: String::new(),
            jwks: RwLock::new(Some(jwks)),
        }
    }

    /// Fetch the key set on first use; every later call is a no-op.
    pub(crate) async fn load(&self) -> MResult<()> {
        let already_loaded = self
            .jwks
            .read()
            .map_err(|e| {
                MedbaseError::ServerError(format!("cannot lock JWKS for read. Error: {e:?}"))
            })?
            .is_some();
        if already_loaded {
            return Ok(());
        }

        info!("fetching JWKS at {}", self.uri);
        let fetched = Self::fetch(&self.uri).await?;

        let mut jwks = self.jwks.write().map_err(|e| {
            MedbaseError::ServerError(format!("cannot lock JWKS for write. Error: {e:?}"))
        })?;
        // two concurrent first requests may both fetch; the first write wins
        if jwks.is_none() {
            *jwks = Some(fetched);
        }
        Ok(())
    }

    /// Find the key identifier `kid` in the cached key set
    pub(crate) fn find(&self, kid: &str) -> MResult<Option<JWK>> {
        Ok(self
            .jwks
            .read()
            .map_err(|e| {
                MedbaseError::ServerError(format!("cannot lock JWKS for read. Error: {e:?}"))
            })?
            .as_ref()
            .and_then(|jwks| jwks.find(kid))
            .cloned())
    }

    async fn fetch(jwks_uri: &str) -> MResult<JWKS> {
        reqwest::get(jwks_uri)
            .await
            .context("Unable to connect to retrieve JWKS")?
            .json::<JWKS>()
            .await
            .map_err(|e| medbase_error!("Unable to get JWKS as a JSON: {e}"))
    }
}
