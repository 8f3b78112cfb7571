//! # buscadog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **public JSON API** for the clinic map
//!   (`/api/v1/veterinarias`, `/api/v1/veterinarias/agg`, `/health`)
//! - Map query strings into validated domain queries (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `buscadog-app` (for port traits and services) and
//! `buscadog-domain` (for the types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
