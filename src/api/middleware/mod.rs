//! HTTP middleware for request processing.
//!
//! Only observability is provided; the service has no authentication or rate
//! limiting.

pub mod tracing;
