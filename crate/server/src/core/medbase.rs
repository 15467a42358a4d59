use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use medbase_server_database::{Database, MainDbParams, PgPool, SqlitePool};
use tracing::info;

use crate::{
    config::ServerParams, idp::IdpClient, medbase_bail, middlewares::AuthenticatedUser,
    result::MResult,
};

/// The hospital and patient records service: the business-rule layer between
/// the HTTP handlers and the store.
pub struct Medbase {
    pub(crate) params: Arc<ServerParams>,
    pub(crate) db: Box<dyn Database + Sync + Send>,
    pub(crate) idp: Option<IdpClient>,
}

impl Medbase {
    /// Instantiate the service, connecting to the configured store and
    /// bootstrapping its schema.
    ///
    /// # Errors
    ///
    /// Returns an error if no database is configured or the store cannot be
    /// reached.
    pub async fn instantiate(params: Arc<ServerParams>) -> MResult<Self> {
        let db: Box<dyn Database + Sync + Send> = match &params.main_db_params {
            Some(MainDbParams::Sqlite(path)) => {
                Box::new(SqlitePool::instantiate(path, params.clear_db_on_start).await?)
            }
            Some(MainDbParams::Postgres(url)) => {
                Box::new(PgPool::instantiate(url.as_str(), params.clear_db_on_start).await?)
            }
            None => medbase_bail!("Fatal: no database configured on the Medbase server"),
        };
        if let Some(db_params) = &params.main_db_params {
            info!("Medbase database: {db_params}");
        }

        let idp = params.idp.as_ref().map(IdpClient::new);

        Ok(Self { params, db, idp })
    }

    /// Get the user attached to the request by the authentication gate,
    /// falling back to the configured default username.
    pub(crate) fn get_user(&self, req_http: &HttpRequest) -> String {
        let default_username = self.params.default_username.clone();
        req_http
            .extensions()
            .get::<AuthenticatedUser>()
            .map_or(default_username, |user| user.username.clone())
    }
}
