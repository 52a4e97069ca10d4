//! Application layer services implementing business logic.
//!
//! Services consume the repository trait from the domain layer and give HTTP
//! handlers a small API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution
pub mod services;
