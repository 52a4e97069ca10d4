//! HTTP request handlers.
//!
//! - [`create`] - `/add/...` link creation
//! - [`redirect`] - every other path

pub mod create;
pub mod redirect;

pub use create::{create_link_handler, create_root_handler};
pub use redirect::redirect_handler;
