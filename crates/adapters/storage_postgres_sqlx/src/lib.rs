//! # buscadog-adapter-storage-postgres-sqlx
//!
//! `PostgreSQL` adapter built on [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Own the connection pool and its tuning knobs
//! - Implement [`buscadog_app::ports::ClinicRepository`] by calling the
//!   two stored functions the database exposes:
//!   `public.veterinarias_agrupadas_bbox(s, w, n, e, precision, limit)`
//!   and `public.veterinarias_detalle_bbox(s, w, n, e, limit)`
//! - Relabel the function output columns into the wire names the API uses
//!
//! There are no migrations here: the schema and the stored functions are
//! owned by the database, this crate only calls them.

pub mod clinic_repository;
pub mod error;
pub mod pool;

pub use clinic_repository::PgClinicRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
