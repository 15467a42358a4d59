use std::{fmt::Display, path::PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SQLITE_PATH: &str = "./medbase.sqlite";

/// Configuration for the database
#[derive(Args, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MainDbConfig {
    /// The main database of the Medbase server that holds the hospital and patient records.
    /// - postgresql: `PostgreSQL`. The database url must be provided
    /// - sqlite: `SQLite`. The data will be stored at the `sqlite_path` file
    ///
    /// Defaults to sqlite when not supplied
    #[clap(
        long,
        env("MEDBASE_DATABASE_TYPE"),
        value_parser(["postgresql", "sqlite"]),
        verbatim_doc_comment
    )]
    pub database_type: Option<String>,

    /// The url of the database for postgresql
    #[clap(
        long,
        env = "MEDBASE_DATABASE_URL",
        required_if_eq("database_type", "postgresql")
    )]
    pub database_url: Option<String>,

    /// The file path of the sqlite database
    #[clap(long, env = "MEDBASE_SQLITE_PATH", default_value = DEFAULT_SQLITE_PATH)]
    pub sqlite_path: PathBuf,

    /// Clear the database on start.
    /// WARNING: This will delete ALL the data in the database
    #[clap(long, env = "MEDBASE_CLEAR_DATABASE", verbatim_doc_comment)]
    pub clear_database: bool,
}

impl Default for MainDbConfig {
    fn default() -> Self {
        Self {
            database_type: None,
            database_url: None,
            sqlite_path: PathBuf::from(DEFAULT_SQLITE_PATH),
            clear_database: false,
        }
    }
}

impl Display for MainDbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.database_type.as_deref() {
            Some("postgresql") => write!(
                f,
                "postgresql: {}",
                self.database_url.as_deref().unwrap_or("[missing url]")
            )?,
            _ => write!(f, "sqlite: {}", self.sqlite_path.display())?,
        }
        write!(f, ", clear_database?: {}", self.clear_database)
    }
}

impl std::fmt::Debug for MainDbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{self}"))
    }
}
