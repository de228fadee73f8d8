// src/db/postgres.rs
// DOCUMENTATION: PostgreSQL-backed document store
// PURPOSE: Keep loosely-typed documents as JSONB rows tagged by collection

use crate::db::{Document, DocumentStore};
use crate::errors::StoreError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::PgPool;
use uuid::Uuid;

/// Oldest first; id breaks ties between rows sharing a timestamp
const FIND_DOCUMENTS: &str = r#"
    SELECT id, body FROM documents
    WHERE collection = $1
    ORDER BY created_at ASC, id ASC
    LIMIT $2
"#;

/// Document store over a single `documents` table
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the documents table if missing
    /// DOCUMENTATION: Used by the seed binary; the API never alters schema
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id UUID PRIMARY KEY,
                collection TEXT NOT NULL,
                body JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS documents_collection_order_idx
            ON documents (collection, created_at, id)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find(&self, collection: &str, limit: u32) -> Result<Vec<Document>, StoreError> {
        let rows: Vec<(Uuid, Value)> = sqlx::query_as(FIND_DOCUMENTS)
            .bind(collection)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|(id, body)| match body {
                Value::Object(body) => Ok(Document {
                    id: id.to_string(),
                    body,
                }),
                _ => Err(StoreError::Decode {
                    collection: collection.to_string(),
                    reason: format!("document {} is not a JSON object", id),
                }),
            })
            .collect()
    }

    async fn insert(
        &self,
        collection: &str,
        body: Map<String, Value>,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(Value::Object(body))
            .execute(&self.pool)
            .await?;

        log::debug!("Inserted {} document {}", collection, id);
        Ok(id.to_string())
    }

    async fn collection_names(&self, limit: u32) -> Result<Vec<String>, StoreError> {
        let names: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT collection FROM documents ORDER BY collection LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(names.into_iter().map(|(name,)| name).collect())
    }

    async fn close(&self) {
        self.pool.close().await;
        log::info!("Database pool closed");
    }
}
