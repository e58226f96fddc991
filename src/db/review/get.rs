use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::review::{Review, ReviewPhoto, ReviewWithPhotos},
};

pub async fn get_review_by_user_and_restroom(
    restroom_id: Uuid,
    user_id: Uuid,
    postgres: PgPool,
) -> Result<Option<Review>, AppError> {
    let review = sqlx::query_as::<_, Review>(
        "SELECT id, restroom_id, user_id, cleanliness, lighting, supplies, safety, accessibility,
            overall_rating, comment, created_at
        FROM reviews
        WHERE restroom_id = $1 AND user_id = $2",
    )
    .bind(restroom_id)
    .bind(user_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to query review: {}", e)))?;

    Ok(review)
}

pub async fn count_reviews_by_user(user_id: Uuid, postgres: PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count reviews: {}", e)))
}

pub async fn get_reviews_for_restroom(
    restroom_id: Uuid,
    postgres: PgPool,
) -> Result<Vec<ReviewWithPhotos>, AppError> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT id, restroom_id, user_id, cleanliness, lighting, supplies, safety, accessibility,
            overall_rating, comment, created_at
        FROM reviews
        WHERE restroom_id = $1
        ORDER BY created_at DESC",
    )
    .bind(restroom_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch reviews: {}", e)))?;

    let photos = sqlx::query_as::<_, ReviewPhoto>(
        "SELECT p.id, p.review_id, p.url, p.original_filename, p.created_at
        FROM review_photos p
        JOIN reviews r ON r.id = p.review_id
        WHERE r.restroom_id = $1",
    )
    .bind(restroom_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch review photos: {}", e)))?;

    let mut photos_by_review: HashMap<Uuid, Vec<ReviewPhoto>> = HashMap::new();
    for photo in photos {
        photos_by_review
            .entry(photo.review_id)
            .or_default()
            .push(photo);
    }

    Ok(reviews
        .into_iter()
        .map(|review| {
            let photos = photos_by_review.remove(&review.id).unwrap_or_default();
            ReviewWithPhotos { review, photos }
        })
        .collect())
}
