//! Core domain entities.
//!
//! The service persists exactly one kind of record, the [`UrlMapping`] between
//! a short link and the long link it redirects to. Mappings are written once
//! and never updated or deleted.

pub mod mapping;

pub use mapping::UrlMapping;
