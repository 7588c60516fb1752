use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{PHONE_API, PHONE_FALLBACK};

/// One phone as returned by the catalogue endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPhone {
    pub phone_name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub data: Vec<ApiPhone>,
}

/// A bar group on the phone chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneRow {
    pub name: String,
    /// Whole dollars
    pub price: u32,
    pub rating: f32,
}

impl PhoneRow {
    /// Charts the first few phones. The endpoint has no prices or ratings,
    /// so both are drawn from `rng`.
    pub fn from_api<R: Rng>(phones: &[ApiPhone], rng: &mut R) -> Vec<PhoneRow> {
        phones
            .iter()
            .take(PHONE_API.max_results)
            .map(|phone| PhoneRow {
                name: phone.phone_name.clone(),
                price: rng.random_range(PHONE_API.mock_price_min..PHONE_API.mock_price_max),
                rating: rng.random_range(PHONE_API.mock_rating_min..=PHONE_API.mock_rating_max)
                    as f32,
            })
            .collect()
    }

    pub fn fallback() -> Vec<PhoneRow> {
        PHONE_FALLBACK
            .iter()
            .map(|&(name, price, rating)| PhoneRow {
                name: name.to_string(),
                price,
                rating,
            })
            .collect()
    }
}
