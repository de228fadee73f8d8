// src/models/package.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Collection, Listing};

/// Bookable tour package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Package {
    pub title: String,

    /// Destination name
    pub destination: String,

    /// Number of days
    #[validate(range(min = 1))]
    #[serde(deserialize_with = "super::integral")]
    pub duration_days: u32,

    /// Base price per person
    #[validate(range(min = 0.0))]
    pub price: f64,

    #[serde(default)]
    pub highlights: Vec<String>,

    #[serde(default)]
    pub inclusions: Vec<String>,

    #[serde(default)]
    pub exclusions: Vec<String>,

    pub image_url: Option<String>,

    #[serde(default)]
    pub is_featured: bool,
}

impl Collection for Package {
    const COLLECTION: &'static str = "package";
}

impl Listing for Package {
    fn fallback_samples() -> Vec<Self> {
        vec![
            Package {
                title: "Kedarnath Yatra 3N/4D".to_string(),
                destination: "Kedarnath".to_string(),
                duration_days: 4,
                price: 12999.0,
                highlights: vec!["Helicopter assist".into(), "VIP darshan".into()],
                inclusions: vec!["Hotel".into(), "Transport".into(), "Meals".into()],
                exclusions: Vec::new(),
                image_url: Some(
                    "https://images.unsplash.com/photo-1512453979798-5ea266f8880c".to_string(),
                ),
                is_featured: true,
            },
            Package {
                title: "Char Dham Express 9N/10D".to_string(),
                destination: "Uttarakhand".to_string(),
                duration_days: 10,
                price: 45999.0,
                highlights: vec!["All 4 shrines".into(), "Experienced guide".into()],
                inclusions: vec!["Hotels".into(), "Transport".into(), "Breakfast".into()],
                exclusions: Vec::new(),
                image_url: Some(
                    "https://images.unsplash.com/photo-1544735716-392fe2489ffa".to_string(),
                ),
                is_featured: true,
            },
        ]
    }
}
