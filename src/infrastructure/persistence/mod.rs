//! Mapping store implementations.
//!
//! # Repositories
//!
//! - [`MongoMappingRepository`] - MongoDB collection used in production
//! - [`InMemoryMappingRepository`] - process-local store for tests and local runs

pub mod memory_mapping_repository;
pub mod mongo_mapping_repository;

pub use memory_mapping_repository::InMemoryMappingRepository;
pub use mongo_mapping_repository::MongoMappingRepository;
