use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::review::get::get_review_by_user_and_restroom,
    errors::AppError,
    models::review::{MAX_REVIEW_PHOTOS, PhotoUpload, RatingInput, Review},
    progression::{self, ContributionKind},
    ratings::overall_rating,
};

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub async fn submit_review(
    restroom_id: Uuid,
    user_id: Uuid,
    ratings: RatingInput,
    comment: Option<String>,
    photos: Vec<PhotoUpload>,
    postgres: PgPool,
) -> Result<Review, AppError> {
    if photos.len() > MAX_REVIEW_PHOTOS {
        return Err(AppError::BadRequest(format!(
            "A review can carry at most {} photos, got {}",
            MAX_REVIEW_PHOTOS,
            photos.len()
        )));
    }

    // Fast path for a clean error; under a race the UNIQUE constraint on
    // (restroom_id, user_id) is what actually holds.
    if get_review_by_user_and_restroom(restroom_id, user_id, postgres.clone())
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateReview);
    }

    let overall = overall_rating(&ratings.values())?;
    let [cleanliness, lighting, supplies, safety, accessibility] = ratings.dimensions();

    // Review and photos land or vanish together.
    let mut tx = postgres.begin().await.map_err(|e| {
        AppError::ReviewPersistenceFailed(format!("Failed to open transaction: {}", e))
    })?;

    let review = sqlx::query_as::<_, Review>(
        "INSERT INTO reviews (restroom_id, user_id, cleanliness, lighting, supplies, safety,
            accessibility, overall_rating, comment)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, restroom_id, user_id, cleanliness, lighting, supplies, safety, accessibility,
            overall_rating, comment, created_at",
    )
    .bind(restroom_id)
    .bind(user_id)
    .bind(cleanliness)
    .bind(lighting)
    .bind(supplies)
    .bind(safety)
    .bind(accessibility)
    .bind(overall)
    .bind(&comment)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::DuplicateReview
        } else {
            AppError::ReviewPersistenceFailed(format!("Failed to insert review: {}", e))
        }
    })?;

    for photo in &photos {
        sqlx::query(
            "INSERT INTO review_photos (review_id, url, original_filename) VALUES ($1, $2, $3)",
        )
        .bind(review.id)
        .bind(&photo.url)
        .bind(&photo.original_filename)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::ReviewPersistenceFailed(format!("Failed to insert review photo: {}", e))
        })?;
    }

    tx.commit().await.map_err(|e| {
        AppError::ReviewPersistenceFailed(format!("Failed to commit review: {}", e))
    })?;

    tracing::info!(
        "Review {} created for restroom {} by user {} (overall {})",
        review.id,
        restroom_id,
        user_id,
        review.overall_rating
    );

    // The review is a committed fact from here on; progression is
    // best-effort and must not unwind it.
    if let Err(e) = progression::record_contribution(
        user_id,
        ContributionKind::ReviewSubmitted,
        postgres.clone(),
    )
    .await
    {
        tracing::warn!("Progression update failed for user {}: {}", user_id, e);
    }
    if let Err(e) = progression::check_review_achievements(user_id, postgres).await {
        tracing::warn!("Achievement check failed for user {}: {}", user_id, e);
    }

    Ok(review)
}
