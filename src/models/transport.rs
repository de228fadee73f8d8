// src/models/transport.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Collection, Listing};

/// Supported vehicle kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Car,
    Bus,
    Tempo,
    Helicopter,
    Train,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TransportOption {
    #[serde(rename = "type")]
    pub transport_type: TransportType,

    pub origin: String,
    pub destination: String,

    #[validate(range(min = 1))]
    #[serde(deserialize_with = "super::integral")]
    pub seats: u32,

    #[validate(range(min = 0.0))]
    pub price: f64,

    pub operator: Option<String>,
}

impl Collection for TransportOption {
    const COLLECTION: &'static str = "transportoption";
}

impl Listing for TransportOption {
    fn fallback_samples() -> Vec<Self> {
        vec![
            TransportOption {
                transport_type: TransportType::Car,
                origin: "Dehradun".to_string(),
                destination: "Kedarnath".to_string(),
                seats: 4,
                price: 5999.0,
                operator: Some("InstantRides".to_string()),
            },
            TransportOption {
                transport_type: TransportType::Bus,
                origin: "Haridwar".to_string(),
                destination: "Badrinath".to_string(),
                seats: 45,
                price: 899.0,
                operator: Some("YatraBus".to_string()),
            },
        ]
    }
}
