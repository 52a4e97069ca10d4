//! MongoDB implementation of the mapping repository.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ReadPreference, SelectionCriteria};
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};
use std::future::IntoFuture;
use std::time::Duration;
use tracing::info;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::utils::db_error::map_write_error;

/// Collection holding `{shortLink, longLink}` documents.
pub const COLLECTION_NAME: &str = "urls";

/// Deadline for inserts and lookups.
const OPERATION_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const PING_TIMEOUT: Duration = Duration::from_secs(5);
const INDEX_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum connections the pool may be establishing at once.
const MAX_CONNECTING: u32 = 100;

/// Stored document layout.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MappingDocument {
    short_link: String,
    long_link: String,
}

impl From<UrlMapping> for MappingDocument {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            short_link: mapping.short_link,
            long_link: mapping.long_link,
        }
    }
}

impl From<MappingDocument> for UrlMapping {
    fn from(document: MappingDocument) -> Self {
        UrlMapping::new(document.short_link, document.long_link)
    }
}

/// MongoDB repository for URL mappings.
///
/// Wraps a pooled driver handle; cloning the collection is cheap, so the
/// repository is shared across requests behind an `Arc`. Every operation is
/// bounded by a deadline and never retried.
pub struct MongoMappingRepository {
    collection: Collection<MappingDocument>,
}

impl MongoMappingRepository {
    /// Connects to `uri`, pings the primary and ensures the `shortLink` index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if any step exceeds its startup
    /// deadline and [`StoreError::Backend`] if the URI is invalid or the
    /// server rejects a command.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let mut options =
            with_timeout("parse_uri", CONNECT_TIMEOUT, ClientOptions::parse(uri)).await?;
        options.max_connecting = Some(MAX_CONNECTING);
        options.connect_timeout = Some(CONNECT_TIMEOUT);

        let client = Client::with_options(options).map_err(backend)?;
        let db = client.database(database);

        with_timeout(
            "ping",
            PING_TIMEOUT,
            db.run_command(doc! { "ping": 1 })
                .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary)),
        )
        .await?;
        info!(database, "Connected to MongoDB");

        let repository = Self {
            collection: db.collection(COLLECTION_NAME),
        };
        repository.ensure_index().await?;

        Ok(repository)
    }

    /// Creates the ascending index on `shortLink` if it does not exist yet.
    ///
    /// The index speeds up lookups; it does not enforce uniqueness.
    pub async fn ensure_index(&self) -> Result<(), StoreError> {
        let index = IndexModel::builder().keys(doc! { "shortLink": 1 }).build();

        let created = with_timeout(
            "create_index",
            INDEX_TIMEOUT,
            self.collection.create_index(index),
        )
        .await?;
        info!(index = %created.index_name, "Index on shortLink ready");

        Ok(())
    }
}

#[async_trait]
impl MappingRepository for MongoMappingRepository {
    async fn insert(&self, mapping: UrlMapping) -> Result<(), StoreError> {
        let short_link = mapping.short_link.clone();
        let document = MappingDocument::from(mapping);

        match tokio::time::timeout(OPERATION_TIMEOUT, self.collection.insert_one(document)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(map_write_error(e, &short_link)),
            Err(_) => Err(StoreError::Timeout {
                operation: "insert_one",
                timeout: OPERATION_TIMEOUT,
            }),
        }
    }

    async fn find_by_short_link(
        &self,
        short_link: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let document = with_timeout(
            "find_one",
            OPERATION_TIMEOUT,
            self.collection.find_one(doc! { "shortLink": short_link }),
        )
        .await?;

        Ok(document.map(UrlMapping::from))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        with_timeout(
            "count_documents",
            OPERATION_TIMEOUT,
            self.collection.count_documents(doc! {}),
        )
        .await
    }
}

/// Runs a driver operation under a deadline.
async fn with_timeout<T, F>(
    operation: &'static str,
    timeout: Duration,
    action: F,
) -> Result<T, StoreError>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(timeout, action).await {
        Ok(result) => result.map_err(backend),
        Err(_) => Err(StoreError::Timeout { operation, timeout }),
    }
}

fn backend(e: mongodb::error::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_document_field_names() {
        let document = MappingDocument::from(UrlMapping::new(
            "abcd1234",
            "https://example.com/foo",
        ));

        let stored = bson::to_document(&document).unwrap();

        assert_eq!(stored.get_str("shortLink").unwrap(), "abcd1234");
        assert_eq!(stored.get_str("longLink").unwrap(), "https://example.com/foo");
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_document_ignores_object_id() {
        let stored = doc! {
            "_id": bson::oid::ObjectId::new(),
            "shortLink": "abcd1234",
            "longLink": "https://example.com/foo",
        };

        let document: MappingDocument = bson::from_document(stored).unwrap();
        let mapping = UrlMapping::from(document);

        assert_eq!(mapping, UrlMapping::new("abcd1234", "https://example.com/foo"));
    }
}
