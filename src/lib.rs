//! # shortlink
//!
//! A URL shortener that only creates links to allow-listed domains, built with
//! Axum and MongoDB.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL mapping entity, allow-list, repository trait
//! - **Application Layer** ([`application`]) - Link creation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB and in-memory stores
//! - **API Layer** ([`api`]) - Handlers, DTOs and tracing middleware
//!
//! ## Endpoints
//!
//! - `GET|POST /add/{domain}/{path...}` returns `{"link": "<8 chars>"}` for
//!   `https://{domain}/{path...}`. A 64-character hex process ID anywhere in
//!   the path gives a deterministic short link; otherwise it is random.
//! - `GET /{short_link}` redirects (302) to the stored URL. Paths shorter than
//!   8 characters, `/` included, redirect to `https://farcaster.vote`.
//!
//! ## Quick Start
//!
//! ```bash
//! export ALLOWED_DOMAINS="vocdoni.app"
//! export MONGO_URI="mongodb://localhost:27017"
//! export MONGO_DB="shortlink"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, Resolution};
    pub use crate::domain::allowed_domains::AllowedDomains;
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::repositories::{MappingRepository, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryMappingRepository;
    pub use crate::state::AppState;
}
