//! Domain model for the clinic locator.
//!
//! Everything in this crate is plain data and pure functions: bounding
//! boxes, validated query parameters and the records returned to API
//! clients. No IO, no frameworks, no async.

pub mod clinic;
pub mod error;
pub mod geo;
pub mod query;
