use std::fmt::Display;

use clap::Args;
use serde::{Deserialize, Serialize};

#[derive(Args, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// The Medbase server port
    #[clap(long, env = "MEDBASE_PORT", default_value = "8000")]
    pub port: u16,

    /// The Medbase server hostname
    #[clap(long, env = "MEDBASE_HOSTNAME", default_value = "0.0.0.0")]
    pub hostname: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            hostname: "0.0.0.0".to_owned(),
        }
    }
}

impl Display for HttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "http://{}:{}", self.hostname, self.port)
    }
}

impl std::fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{self}"))
    }
}
