//! shopfront-server: read-only HTTP API over the shop database
//!
//! Serves services, locations (with opening hours) and testimonials
//! as JSON envelopes of the form `{message, data?}`.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod queries;
pub mod state;

pub use config::DbConfig;
pub use http::{run_server, ServerConfig, ServerError};
pub use state::AppState;
