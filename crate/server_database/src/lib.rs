//! Data records and SQL stores for the Medbase server.
//!
//! This crate owns everything that touches the relational store:
//! - the plain data records (`Hospital`, `Patient`, `CancerType`) and their
//!   create/patch payloads,
//! - the per-entity repository traits (`HospitalStore`, `PatientStore`) and
//!   the `Database` super-trait the server consumes,
//! - the `sqlx`-based `PostgreSQL` and `SQLite` implementations.
//!
//! Stores are deliberately dumb: single-entity lookups, existence reported
//! through `Option`/`bool`, and field-level writes. Business rules (capacity,
//! oncology consistency) live in the server crate.

mod error;
pub use error::{DbError, DbResult};

mod main_db_params;
pub use main_db_params::MainDbParams;

mod records;
pub use records::{
    CancerType, Hospital, HospitalCreate, HospitalPatch, Patient, PatientCreate, PatientPatch,
};

mod store;
pub use store::{Database, HospitalStore, PatientStore, PgPool, SqlitePool};

#[cfg(test)]
mod tests;
