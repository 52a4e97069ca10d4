//! Repository trait for URL mapping persistence.

use crate::domain::entities::UrlMapping;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors returned by mapping store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation did not complete within its deadline.
    #[error("store operation `{operation}` timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    /// The store's index rejected a second document with the same short link.
    #[error("short link `{0}` already exists")]
    DuplicateKey(String),

    /// Any other driver or server failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Repository interface for URL mappings keyed by short link.
///
/// Writes are unconditional inserts: callers never check for an existing
/// mapping first, and implementations must not upsert or retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoMappingRepository`] - MongoDB collection
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - tests and local runs
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if the store enforces uniqueness on
    /// the short link and it is already taken, [`StoreError::Timeout`] when the
    /// deadline passes, and [`StoreError::Backend`] otherwise.
    async fn insert(&self, mapping: UrlMapping) -> Result<(), StoreError>;

    /// Finds the mapping stored under exactly `short_link`.
    ///
    /// When several documents share the key, the first one in natural order
    /// is returned.
    async fn find_by_short_link(&self, short_link: &str)
    -> Result<Option<UrlMapping>, StoreError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<u64, StoreError>;
}
