use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::restroom::Restroom,
    progression::{self, ContributionKind},
};

pub async fn add_restroom(
    name: String,
    latitude: f64,
    longitude: f64,
    directions: Option<String>,
    added_by: Uuid,
    postgres: PgPool,
) -> Result<Restroom, AppError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("Restroom name must not be empty".into()));
    }
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::BadRequest(format!(
            "Coordinates out of range: ({}, {})",
            latitude, longitude
        )));
    }

    let restroom = sqlx::query_as::<_, Restroom>(
        "INSERT INTO restrooms (name, latitude, longitude, directions, added_by)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, latitude, longitude, directions, added_by, created_at",
    )
    .bind(&name)
    .bind(latitude)
    .bind(longitude)
    .bind(&directions)
    .bind(added_by)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create restroom: {}", e)))?;

    tracing::info!(
        "Restroom '{}' added at ({}, {}) by user {}",
        restroom.name,
        latitude,
        longitude,
        added_by
    );

    // Same isolation as the review path: the restroom is committed,
    // progression failures only get logged.
    if let Err(e) = progression::record_contribution(
        added_by,
        ContributionKind::RestroomAdded,
        postgres.clone(),
    )
    .await
    {
        tracing::warn!("Progression update failed for user {}: {}", added_by, e);
    }
    if let Err(e) = progression::check_restroom_achievements(added_by, postgres).await {
        tracing::warn!("Achievement check failed for user {}: {}", added_by, e);
    }

    Ok(restroom)
}
