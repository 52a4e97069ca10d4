//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingRepository, StoreError};

/// In-memory mapping store.
///
/// Behaves like the MongoDB collection: documents are appended in insertion
/// order, several documents may share a short link, and lookups return the
/// earliest one. [`InMemoryMappingRepository::with_unique_index`] instead
/// rejects a second document with the same short link, like a unique index
/// would.
#[derive(Debug, Default)]
pub struct InMemoryMappingRepository {
    mappings: RwLock<Vec<UrlMapping>>,
    unique: bool,
}

impl InMemoryMappingRepository {
    /// Creates an empty repository that accepts duplicate short links.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository that rejects duplicate short links.
    pub fn with_unique_index() -> Self {
        Self {
            mappings: RwLock::default(),
            unique: true,
        }
    }

    /// Returns a copy of every stored mapping in insertion order.
    pub async fn snapshot(&self) -> Vec<UrlMapping> {
        self.mappings.read().await.clone()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn insert(&self, mapping: UrlMapping) -> Result<(), StoreError> {
        let mut mappings = self.mappings.write().await;

        if self.unique && mappings.iter().any(|m| m.short_link == mapping.short_link) {
            return Err(StoreError::DuplicateKey(mapping.short_link));
        }

        mappings.push(mapping);
        Ok(())
    }

    async fn find_by_short_link(
        &self,
        short_link: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let mappings = self.mappings.read().await;

        Ok(mappings.iter().find(|m| m.short_link == short_link).cloned())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.mappings.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryMappingRepository::new();

        repo.insert(UrlMapping::new("abcd1234", "https://example.com/a"))
            .await
            .unwrap();

        let found = repo.find_by_short_link("abcd1234").await.unwrap();
        assert_eq!(
            found,
            Some(UrlMapping::new("abcd1234", "https://example.com/a"))
        );
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_is_exact() {
        let repo = InMemoryMappingRepository::new();
        repo.insert(UrlMapping::new("abcd1234", "https://example.com/a"))
            .await
            .unwrap();

        assert!(repo.find_by_short_link("ABCD1234").await.unwrap().is_none());
        assert!(repo.find_by_short_link("abcd1234/").await.unwrap().is_none());
        assert!(repo.find_by_short_link("abcd123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicates_allowed_and_first_wins() {
        let repo = InMemoryMappingRepository::new();

        repo.insert(UrlMapping::new("abcd1234", "https://example.com/first"))
            .await
            .unwrap();
        repo.insert(UrlMapping::new("abcd1234", "https://example.com/second"))
            .await
            .unwrap();

        let found = repo.find_by_short_link("abcd1234").await.unwrap().unwrap();
        assert_eq!(found.long_link, "https://example.com/first");
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unique_index_rejects_duplicates() {
        let repo = InMemoryMappingRepository::with_unique_index();

        repo.insert(UrlMapping::new("abcd1234", "https://example.com/first"))
            .await
            .unwrap();
        let result = repo
            .insert(UrlMapping::new("abcd1234", "https://example.com/second"))
            .await;

        assert!(matches!(result, Err(StoreError::DuplicateKey(link)) if link == "abcd1234"));
        assert_eq!(repo.snapshot().await.len(), 1);
    }
}
