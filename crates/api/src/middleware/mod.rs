//! HTTP middleware for the buttons API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, transaction)
//! 2. `TraceLayer` (request span and latency)
//! 3. Request ID (correlate logs, Sentry events and responses)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
