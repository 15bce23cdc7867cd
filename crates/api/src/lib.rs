//! Promptbox API server library.
//!
//! Exposes configuration, state, error handling and routing so both the
//! binary entrypoint and the integration tests can build the application.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
