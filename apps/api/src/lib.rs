//! Résumé analysis and job matching service.
//!
//! The binary in `main.rs` wires these modules into an Axum server; the library
//! split lets integration tests drive the router directly.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod job_match;
pub mod routes;
pub mod state;
pub mod store;
