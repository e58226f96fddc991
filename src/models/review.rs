use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::ratings::coerce_rating;

/// Upload collaborator enforces type and size; we only cap the count.
pub const MAX_REVIEW_PHOTOS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub restroom_id: Uuid,
    pub user_id: Uuid,
    pub cleanliness: Option<i16>,
    pub lighting: Option<i16>,
    pub supplies: Option<i16>,
    pub safety: Option<i16>,
    pub accessibility: Option<i16>,
    pub overall_rating: f32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The five per-dimension ratings as they arrive off the wire. Clients send
/// numbers, numeric strings, empty strings or nothing at all, so each field
/// stays untyped until the aggregator coerces it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingInput {
    #[serde(default)]
    pub cleanliness: Value,
    #[serde(default)]
    pub lighting: Value,
    #[serde(default)]
    pub supplies: Value,
    #[serde(default)]
    pub safety: Value,
    #[serde(default)]
    pub accessibility: Value,
}

impl RatingInput {
    pub fn values(&self) -> [&Value; 5] {
        [
            &self.cleanliness,
            &self.lighting,
            &self.supplies,
            &self.safety,
            &self.accessibility,
        ]
    }

    /// Per-dimension values as stored: coerced to the 1-5 scale, NULL where
    /// coercion failed.
    pub fn dimensions(&self) -> [Option<i16>; 5] {
        self.values()
            .map(|value| coerce_rating(value).map(|n| n.round() as i16))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUpload {
    pub url: String,
    pub original_filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPhoto {
    pub id: Uuid,
    pub review_id: Uuid,
    pub url: String,
    pub original_filename: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithPhotos {
    pub review: Review,
    pub photos: Vec<ReviewPhoto>,
}
