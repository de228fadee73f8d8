// src/services/lead_service.rs
// DOCUMENTATION: Lead capture logic
// PURPOSE: Persist inquiries and newsletter sign-ups

use crate::db::Store;
use crate::models::{Lead, LeadReceipt};

pub struct LeadService;

impl LeadService {
    /// Store a validated submission
    /// DOCUMENTATION: Always answers "ok"; a failed write is logged and
    /// reported only as a null id
    pub async fn submit<T: Lead>(store: &Store, lead: &T) -> LeadReceipt {
        match store.insert(lead).await {
            Ok(id) => {
                log::info!("Captured {} lead {}", T::COLLECTION, id);
                LeadReceipt::ok(Some(id))
            }
            Err(e) => {
                log::warn!("Dropped {} lead, store write failed: {}", T::COLLECTION, e);
                LeadReceipt::ok(None)
            }
        }
    }
}
