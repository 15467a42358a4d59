//! JWT Authentication Module
//!
//! This module provides JWT (JSON Web Token) based authentication for the
//! Medbase server. It includes components for token validation, JWKS
//! (JSON Web Key Set) management, and middleware integration.

mod jwks;
pub(crate) use jwks::JwksManager;

mod jwt;
pub(crate) use jwt::{JwtConfig, UserClaim};

mod jwt_middleware;
pub(crate) use jwt_middleware::JwtAuth;

mod jwt_token_auth;
