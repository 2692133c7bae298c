//! catalogctl-server: REST API over the restaurant catalogue
//!
//! Handlers call the core use cases; errors become JSON bodies with a
//! status code derived from `CatalogError`.

pub mod http;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
