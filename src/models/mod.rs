// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Record kinds served and captured by the API, and the traits
// that tie each kind to its document collection

pub mod destination;
pub mod hotel;
pub mod lead;
pub mod package;
pub mod testimonial;
pub mod transport;

pub use destination::*;
pub use hotel::*;
pub use lead::*;
pub use package::*;
pub use testimonial::*;
pub use transport::*;

use serde::{de, de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A record kind stored under its own document collection
/// Collection names are the lowercased type name, e.g. TransportOption -> "transportoption"
pub trait Collection {
    const COLLECTION: &'static str;
}

/// A record kind served by a listing endpoint
/// DOCUMENTATION: Listings read from the store and fall back to
/// `fallback_samples()` when the store cannot satisfy the read
pub trait Listing:
    Collection + Serialize + DeserializeOwned + Validate + Clone + Send + 'static
{
    /// Page size when the request carries no `limit`
    const DEFAULT_LIMIT: u32 = 50;

    /// Fixed records returned when the store is unavailable
    fn fallback_samples() -> Vec<Self>;
}

/// A user submission persisted for follow-up
pub trait Lead: Collection + Serialize + Validate + Send + Sync {}

/// Query parameters accepted by every listing endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u32>,
}

/// Response for lead capture endpoints
/// `id` is null when the submission could not be persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub status: String,
    pub id: Option<String>,
}

impl LeadReceipt {
    pub fn ok(id: Option<String>) -> Self {
        LeadReceipt {
            status: "ok".to_string(),
            id,
        }
    }
}

/// Deserialize a non-negative integer field from loosely-typed documents
/// Whole-number floats such as `3.0` are accepted; fractional values are not
pub(crate) fn integral<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let number = serde_json::Number::deserialize(deserializer)?;

    let value = match number.as_u64() {
        Some(n) => n,
        None => match number.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 => f as u64,
            _ => {
                return Err(de::Error::custom(format!(
                    "expected a non-negative whole number, got {}",
                    number
                )))
            }
        },
    };

    T::try_from(value).map_err(|_| de::Error::custom(format!("{} is out of range", number)))
}
