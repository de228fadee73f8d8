// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod content_service;
pub mod lead_service;

pub use content_service::*;
pub use lead_service::*;
