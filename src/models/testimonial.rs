// src/models/testimonial.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Collection, Listing};

/// Customer testimonial shown on the marketing site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Testimonial {
    pub name: String,
    pub text: String,

    #[validate(range(min = 1, max = 5))]
    #[serde(deserialize_with = "super::integral")]
    pub rating: u8,

    pub location: Option<String>,
}

impl Collection for Testimonial {
    const COLLECTION: &'static str = "testimonial";
}

impl Listing for Testimonial {
    const DEFAULT_LIMIT: u32 = 10;

    fn fallback_samples() -> Vec<Self> {
        vec![
            Testimonial {
                name: "Rahul".to_string(),
                text: "Seamless Kedarnath yatra, great arrangements!".to_string(),
                rating: 5,
                location: Some("Delhi".to_string()),
            },
            Testimonial {
                name: "Sneha".to_string(),
                text: "Quick hotel booking and polite support.".to_string(),
                rating: 4,
                location: Some("Mumbai".to_string()),
            },
        ]
    }
}
