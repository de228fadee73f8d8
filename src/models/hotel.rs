// src/models/hotel.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Collection, Listing};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Hotel {
    pub name: String,
    pub destination: String,

    /// Star rating (1-5)
    #[validate(range(min = 1, max = 5))]
    #[serde(deserialize_with = "super::integral")]
    pub stars: u8,

    #[validate(range(min = 0.0))]
    pub price_per_night: f64,

    #[serde(default)]
    pub amenities: Vec<String>,

    pub image_url: Option<String>,
    pub contact_phone: Option<String>,
}

impl Collection for Hotel {
    const COLLECTION: &'static str = "hotel";
}

impl Listing for Hotel {
    fn fallback_samples() -> Vec<Self> {
        vec![
            Hotel {
                name: "Himalayan View Inn".to_string(),
                destination: "Guptkashi".to_string(),
                stars: 3,
                price_per_night: 2200.0,
                amenities: vec!["WiFi".into(), "Hot Water".into()],
                image_url: Some(
                    "https://images.unsplash.com/photo-1551776235-dde6d4829808".to_string(),
                ),
                contact_phone: None,
            },
            Hotel {
                name: "Char Dham Residency".to_string(),
                destination: "Joshimath".to_string(),
                stars: 4,
                price_per_night: 3800.0,
                amenities: vec!["Breakfast".into(), "Parking".into()],
                image_url: Some(
                    "https://images.unsplash.com/photo-1566073771259-6a8506099945".to_string(),
                ),
                contact_phone: None,
            },
        ]
    }
}
