//! Infrastructure layer for external integrations.
//!
//! Implements the repository trait defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - MongoDB and in-memory mapping stores

pub mod persistence;
