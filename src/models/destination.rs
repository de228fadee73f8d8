// src/models/destination.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Collection, Listing};

/// Travel destination, e.g. a pilgrimage town
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Destination {
    /// Destination name e.g., Kedarnath
    pub name: String,

    /// Indian state
    pub state: String,

    /// Short description
    pub description: Option<String>,

    /// Hero image URL
    pub image_url: Option<String>,

    /// Tags/keywords
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Collection for Destination {
    const COLLECTION: &'static str = "destination";
}

impl Listing for Destination {
    fn fallback_samples() -> Vec<Self> {
        vec![
            Destination {
                name: "Kedarnath".to_string(),
                state: "Uttarakhand".to_string(),
                description: Some("One of the holiest Char Dham shrines.".to_string()),
                image_url: Some(
                    "https://images.unsplash.com/photo-1583413230541-9b5f2a5c6cfb".to_string(),
                ),
                tags: vec!["yatra".into(), "temple".into(), "himalayas".into()],
            },
            Destination {
                name: "Badrinath".to_string(),
                state: "Uttarakhand".to_string(),
                description: Some("Sacred town in Chamoli district.".to_string()),
                image_url: Some(
                    "https://images.unsplash.com/photo-1603262110263-fb0112e7cc33".to_string(),
                ),
                tags: vec!["char dham".into(), "alakananda".into()],
            },
        ]
    }
}
