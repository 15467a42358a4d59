use std::fmt;

use clap::Parser;
use serde::{Deserialize, Serialize};

use super::{HttpConfig, IdpAuthConfig, MainDbConfig};
use crate::{result::MResult, telemetry::TelemetryConfig};

fn default_username() -> String {
    "admin".to_owned()
}

#[derive(Parser, Serialize, Deserialize)]
#[clap(version, about, long_about = None)]
#[serde(default)]
pub struct ClapConfig {
    #[clap(flatten)]
    pub db: MainDbConfig,

    #[clap(flatten)]
    pub http: HttpConfig,

    #[clap(flatten)]
    pub idp_auth: IdpAuthConfig,

    #[clap(flatten)]
    pub telemetry: TelemetryConfig,

    /// The default username to use when no authentication method is configured
    #[clap(long, env = "MEDBASE_DEFAULT_USERNAME", default_value = "admin")]
    #[serde(default = "default_username")]
    pub default_username: String,
}

impl Default for ClapConfig {
    fn default() -> Self {
        Self {
            db: MainDbConfig::default(),
            http: HttpConfig::default(),
            idp_auth: IdpAuthConfig::default(),
            telemetry: TelemetryConfig::default(),
            default_username: default_username(),
        }
    }
}

impl ClapConfig {
    /// Load the configuration from the TOML file named by the `MEDBASE_CONF`
    /// environment variable, falling back to command line arguments and
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn load_from_file() -> MResult<Self> {
        if let Ok(conf_path) = std::env::var("MEDBASE_CONF") {
            let content = std::fs::read_to_string(&conf_path)?;
            let config = toml::from_str::<Self>(&content).map_err(|e| {
                crate::medbase_error!("Cannot parse the configuration file {conf_path}: {e}")
            })?;
            return Ok(config);
        }
        Ok(Self::parse())
    }
}

impl fmt::Debug for ClapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut x = f.debug_struct("");
        let x = x.field("db", &self.db);
        let x = if self.idp_auth.idp_user_pool_id.is_some() {
            x.field("idp auth", &self.idp_auth)
        } else {
            x
        };
        let x = x.field("http", &self.http);
        let x = x.field("default username", &self.default_username);
        x.finish()
    }
}
