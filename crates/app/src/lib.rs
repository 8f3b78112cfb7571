//! Application layer: use-cases and the ports they depend on.
//!
//! Services own the orchestration of a request, adapters plug in behind
//! the port traits. Nothing here knows about HTTP or SQL.

pub mod ports;
pub mod services;
