//! Middleware module
//!
//! Contains the CORS and request logging middleware

pub mod cors;
pub mod logging;

pub use cors::cors_middleware;
pub use logging::request_logging_middleware;
