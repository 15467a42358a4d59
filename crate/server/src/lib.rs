//! Medbase server library.
//!
//! The server exposes a CRUD HTTP API over hospitals and patients, gated by
//! bearer tokens issued by an external identity provider and verified against
//! its JSON Web Key Set. The modules mirror the request path:
//! [`middlewares`] authenticates, [`core`] applies the business rules
//! (hospital capacity, oncology consistency), and the store crate persists.

pub mod config;
mod core;
pub use crate::core::Medbase;
pub mod error;
mod idp;
mod middlewares;
pub mod result;
mod routes;
pub mod start_server;
pub mod telemetry;

#[cfg(test)]
mod tests;
