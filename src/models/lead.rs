// src/models/lead.rs
// DOCUMENTATION: Lead capture submissions
// PURPOSE: Request bodies for inquiry and newsletter endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Collection, Lead};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Package,
    Hotel,
    Transport,
    Custom,
}

/// Booking inquiry from the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Inquiry {
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub phone: String,
    pub service_type: ServiceType,
    pub message: Option<String>,
    pub package_id: Option<String>,
    pub travel_dates: Option<String>,

    /// Party size, defaults to 1 when omitted
    #[serde(default = "default_travelers")]
    #[validate(range(min = 1))]
    pub travelers: Option<u32>,
}

fn default_travelers() -> Option<u32> {
    Some(1)
}

impl Collection for Inquiry {
    const COLLECTION: &'static str = "inquiry";
}

impl Lead for Inquiry {}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Newsletter {
    #[validate(email)]
    pub email: String,
}

impl Collection for Newsletter {
    const COLLECTION: &'static str = "newsletter";
}

impl Lead for Newsletter {}
