// src/bin/seed.rs
// DOCUMENTATION: Seed tool for the document store
// PURPOSE: Create the documents table and load the sample content so a
// fresh database serves the same records as fallback mode.
// Safe to re-run: collections that already hold documents are skipped.

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use travel_platform_api::config::{self, Config};
use travel_platform_api::db::{seed_samples, DocumentStore, PgDocumentStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,sqlx=warn");
    }
    env_logger::init();

    let config = Config::from_env();
    let pool = match config::init_db_pool(&config).context("invalid database configuration")? {
        Some(pool) => pool,
        None => bail!("DATABASE_URL is required to seed the document store"),
    };

    let store = PgDocumentStore::new(pool);
    store
        .ensure_schema()
        .await
        .context("could not create documents table")?;

    let total = seed_samples(&store)
        .await
        .context("could not seed sample documents")?;

    log::info!("Seeded {} documents", total);
    store.close().await;
    Ok(())
}
