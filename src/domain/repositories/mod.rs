//! Repository trait definitions for the domain layer.
//!
//! The mapping store is an external collaborator; the service only needs
//! insert and find-one by short link. Implementations live in
//! `crate::infrastructure::persistence`, and a `mockall` mock is generated for
//! unit tests.

pub mod mapping_repository;

pub use mapping_repository::{MappingRepository, StoreError};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
