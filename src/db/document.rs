// src/db/document.rs
// DOCUMENTATION: Document store abstraction
// PURPOSE: Loosely-typed documents grouped by collection, and the typed
// handle the services use to read and write them

use crate::errors::StoreError;
use crate::models::{Lead, Listing};
use async_trait::async_trait;
use serde::ser::Error as _;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Store-internal identifier field, never part of a served record
pub const INTERNAL_ID_FIELD: &str = "_id";

/// A raw document as held by the store
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub body: Map<String, Value>,
}

impl Document {
    /// Shape a document into a typed record
    /// DOCUMENTATION: Drops the internal id, lets serde apply defaults for
    /// missing optional fields (unknown fields are ignored), then runs the
    /// record's validation rules
    pub fn into_record<T: Listing>(mut self) -> Result<T, StoreError> {
        self.body.remove(INTERNAL_ID_FIELD);

        let record: T = serde_json::from_value(Value::Object(self.body)).map_err(|e| {
            StoreError::Decode {
                collection: T::COLLECTION.to_string(),
                reason: format!("document {}: {}", self.id, e),
            }
        })?;

        record.validate().map_err(|e| StoreError::Decode {
            collection: T::COLLECTION.to_string(),
            reason: format!("document {}: {}", self.id, e),
        })?;

        Ok(record)
    }
}

/// Backend operations a document store must provide
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch up to `limit` documents of a collection, oldest first
    async fn find(&self, collection: &str, limit: u32) -> Result<Vec<Document>, StoreError>;

    /// Insert a document and return its generated identifier
    async fn insert(&self, collection: &str, body: Map<String, Value>)
        -> Result<String, StoreError>;

    /// Names of collections holding at least one document
    async fn collection_names(&self, limit: u32) -> Result<Vec<String>, StoreError>;

    /// Release backend resources
    async fn close(&self);
}

/// Process-wide store handle injected into the handlers at startup
/// DOCUMENTATION: Holds no backend when DATABASE_URL is unset; every
/// operation then fails with StoreError::NotConfigured
#[derive(Clone, Default)]
pub struct Store {
    backend: Option<Arc<dyn DocumentStore>>,
}

impl Store {
    pub fn new(backend: Arc<dyn DocumentStore>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> Result<&dyn DocumentStore, StoreError> {
        self.backend.as_deref().ok_or(StoreError::NotConfigured)
    }

    /// Read up to `limit` typed records of kind T
    pub async fn find<T: Listing>(&self, limit: u32) -> Result<Vec<T>, StoreError> {
        let documents = self.backend()?.find(T::COLLECTION, limit).await?;

        documents
            .into_iter()
            .take(limit as usize)
            .map(|doc| doc.into_record::<T>())
            .collect()
    }

    /// Persist a lead with created/updated timestamps
    pub async fn insert<T: Lead>(&self, record: &T) -> Result<String, StoreError> {
        let backend = self.backend()?;

        let mut body = match serde_json::to_value(record)? {
            Value::Object(map) => map,
            other => {
                let reason = format!(
                    "{} lead must serialize to a JSON object, got {}",
                    T::COLLECTION,
                    other
                );
                return Err(StoreError::Encode(serde_json::Error::custom(reason)));
            }
        };

        let now = Value::String(chrono::Utc::now().to_rfc3339());
        body.insert("created_at".to_string(), now.clone());
        body.insert("updated_at".to_string(), now);

        backend.insert(T::COLLECTION, body).await
    }

    pub async fn collection_names(&self, limit: u32) -> Result<Vec<String>, StoreError> {
        self.backend()?.collection_names(limit).await
    }

    pub async fn close(&self) {
        if let Some(backend) = &self.backend {
            backend.close().await;
        }
    }
}
