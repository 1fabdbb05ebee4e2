//! In-memory implementation of the booking REST API.
//!
//! Serves the same paths and JSON shapes the pages consume, so the client can
//! be run and tested without the production backend.

pub mod auth;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod state;

pub use routes::router;
pub use state::AppState;
