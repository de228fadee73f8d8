// src/db/seed.rs
// DOCUMENTATION: Load the sample content into a document store
// PURPOSE: Give a fresh database the same records fallback mode serves

use crate::db::DocumentStore;
use crate::errors::StoreError;
use crate::models::{Destination, Hotel, Listing, Package, Testimonial, TransportOption};
use serde::ser::Error as _;
use serde_json::Value;

/// Insert T's sample records unless its collection already holds documents
/// Returns the number of documents inserted
pub async fn seed_collection<T: Listing>(store: &dyn DocumentStore) -> Result<usize, StoreError> {
    if !store.find(T::COLLECTION, 1).await?.is_empty() {
        log::info!("{}: already populated, skipping", T::COLLECTION);
        return Ok(0);
    }

    let samples = T::fallback_samples();

    for sample in &samples {
        let body = match serde_json::to_value(sample)? {
            Value::Object(body) => body,
            other => {
                return Err(StoreError::Encode(serde_json::Error::custom(format!(
                    "{} sample is not a JSON object: {}",
                    T::COLLECTION,
                    other
                ))))
            }
        };
        store.insert(T::COLLECTION, body).await?;
    }

    log::info!("{}: {} documents", T::COLLECTION, samples.len());
    Ok(samples.len())
}

/// Seed every listing collection, returns the total inserted
pub async fn seed_samples(store: &dyn DocumentStore) -> Result<usize, StoreError> {
    let mut total = 0;
    total += seed_collection::<Destination>(store).await?;
    total += seed_collection::<Package>(store).await?;
    total += seed_collection::<Hotel>(store).await?;
    total += seed_collection::<TransportOption>(store).await?;
    total += seed_collection::<Testimonial>(store).await?;
    Ok(total)
}
