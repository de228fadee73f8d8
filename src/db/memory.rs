// src/db/memory.rs
// DOCUMENTATION: In-memory document store for tests

use crate::db::{Document, DocumentStore};
use crate::errors::StoreError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Collections kept in insertion order; `failing()` builds a store whose
/// every operation errors, standing in for an unreachable server
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Seed a collection with raw JSON bodies
    pub async fn with_documents(self, collection: &str, bodies: Vec<Value>) -> Self {
        {
            let mut collections = self.collections.write().await;
            let docs = collections.entry(collection.to_string()).or_default();
            for body in bodies {
                docs.push(Document {
                    id: Uuid::new_v4().to_string(),
                    body: body.as_object().cloned().unwrap_or_default(),
                });
            }
        }
        self
    }

    pub async fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, limit: u32) -> Result<Vec<Document>, StoreError> {
        self.check()?;
        Ok(self
            .documents(collection)
            .await
            .into_iter()
            .take(limit as usize)
            .collect())
    }

    async fn insert(
        &self,
        collection: &str,
        body: Map<String, Value>,
    ) -> Result<String, StoreError> {
        self.check()?;
        let id = Uuid::new_v4().to_string();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                body,
            });
        Ok(id)
    }

    async fn collection_names(&self, limit: u32) -> Result<Vec<String>, StoreError> {
        self.check()?;
        Ok(self
            .collections
            .read()
            .await
            .keys()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn close(&self) {}
}
