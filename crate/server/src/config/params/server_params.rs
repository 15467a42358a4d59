use medbase_server_database::MainDbParams;
use url::Url;

use super::IdpParams;
use crate::{config::ClapConfig, medbase_bail, result::MResult};

/// This structure is the context used by the server
/// while it is running. There is a singleton instance
/// shared between all threads.
#[derive(Debug)]
pub struct ServerParams {
    /// The identity provider parameters if authentication is enabled
    pub idp: Option<IdpParams>,

    /// The DB parameters supplied on the command line
    pub main_db_params: Option<MainDbParams>,

    /// Whether to clear the database on start
    pub clear_db_on_start: bool,

    pub hostname: String,

    pub port: u16,

    /// The username to use when no authentication method is configured
    pub default_username: String,
}

impl ServerParams {
    /// Tries to create a `ServerParams` instance from the given `ClapConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion from `ClapConfig` to `ServerParams` fails.
    pub fn try_from(conf: ClapConfig) -> MResult<Self> {
        let idp = IdpParams::try_from_config(&conf.idp_auth)?;

        let main_db_params = match conf.db.database_type.as_deref() {
            None | Some("sqlite") => Some(MainDbParams::Sqlite(conf.db.sqlite_path.clone())),
            Some("postgresql") => {
                let Some(url) = &conf.db.database_url else {
                    medbase_bail!("A database url must be supplied for postgresql")
                };
                Some(MainDbParams::Postgres(Url::parse(url)?))
            }
            Some(other) => medbase_bail!("Unknown database type: {other}"),
        };

        Ok(Self {
            idp,
            main_db_params,
            clear_db_on_start: conf.db.clear_database,
            hostname: conf.http.hostname,
            port: conf.http.port,
            default_username: conf.default_username,
        })
    }
}
