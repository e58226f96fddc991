use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::restroom::Restroom};

// Map viewport queries are capped; the client narrows the bounds to see more.
const MAX_RESTROOMS_PER_QUERY: i64 = 500;

pub async fn get_restroom_by_id(restroom_id: Uuid, postgres: PgPool) -> Result<Restroom, AppError> {
    sqlx::query_as::<_, Restroom>(
        "SELECT id, name, latitude, longitude, directions, added_by, created_at
        FROM restrooms
        WHERE id = $1",
    )
    .bind(restroom_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch restroom: {}", e)))?
    .ok_or_else(|| AppError::NotFound(format!("Restroom {} not found", restroom_id)))
}

pub async fn get_restrooms_in_bounds(
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
    postgres: PgPool,
) -> Result<Vec<Restroom>, AppError> {
    if min_lat > max_lat || min_lng > max_lng {
        return Err(AppError::BadRequest(
            "Bounds are inverted: min must not exceed max".into(),
        ));
    }

    let restrooms = sqlx::query_as::<_, Restroom>(
        "SELECT id, name, latitude, longitude, directions, added_by, created_at
        FROM restrooms
        WHERE latitude BETWEEN $1 AND $2 AND longitude BETWEEN $3 AND $4
        ORDER BY created_at DESC
        LIMIT $5",
    )
    .bind(min_lat)
    .bind(max_lat)
    .bind(min_lng)
    .bind(max_lng)
    .bind(MAX_RESTROOMS_PER_QUERY)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch restrooms: {}", e)))?;

    Ok(restrooms)
}
