//! Domain layer containing business entities and logic.
//!
//! This module holds the pieces of the service that do not depend on HTTP or on
//! a particular store:
//!
//! - [`entities`] - The persisted URL mapping
//! - [`allowed_domains`] - The redirect-target allow-list
//! - [`repositories`] - Data access trait for the mapping store
//!
//! Concrete stores live in `crate::infrastructure::persistence`; request-level
//! orchestration lives in [`crate::application::services`].

pub mod allowed_domains;
pub mod entities;
pub mod repositories;
