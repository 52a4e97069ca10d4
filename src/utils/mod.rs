//! Helpers shared by the service and the store.
//!
//! - [`code_generator`] - Short link derivation (process ID hash or UUID)
//! - [`creation_path`] - Parsing of `/add/<domain>/<path...>`
//! - [`db_error`] - MongoDB error classification

pub mod code_generator;
pub mod creation_path;
pub mod db_error;
