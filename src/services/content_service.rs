// src/services/content_service.rs
// DOCUMENTATION: Content listing logic
// PURPOSE: Serve records from the document store, degrading to fixed
// samples whenever the store cannot answer

use crate::db::Store;
use crate::models::Listing;

pub struct ContentService;

impl ContentService {
    /// List up to `limit` records of kind T
    /// DOCUMENTATION: Never fails. Store errors (unconfigured, unreachable,
    /// malformed documents) are logged and answered with
    /// `T::fallback_samples()` truncated to the limit
    pub async fn list<T: Listing>(store: &Store, limit: Option<u32>) -> Vec<T> {
        let limit = limit.unwrap_or(T::DEFAULT_LIMIT);

        match store.find::<T>(limit).await {
            Ok(records) => records,
            Err(e) => {
                log::warn!(
                    "Serving fallback {} samples (limit {}): {}",
                    T::COLLECTION,
                    limit,
                    e
                );
                Self::fallback::<T>(limit)
            }
        }
    }

    fn fallback<T: Listing>(limit: u32) -> Vec<T> {
        T::fallback_samples()
            .into_iter()
            .take(limit as usize)
            .collect()
    }
}
