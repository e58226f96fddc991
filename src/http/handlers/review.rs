use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::review::{get::get_reviews_for_restroom, post::submit_review},
    models::review::{PhotoUpload, RatingInput, Review, ReviewWithPhotos},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewPayload {
    #[serde(flatten)]
    pub ratings: RatingInput,
    pub comment: Option<String>,
    #[serde(default)]
    pub photos: Vec<PhotoUpload>,
}

pub async fn submit_review_handler(
    State(state): State<AppState>,
    Path(restroom_id): Path<Uuid>,
    claims: AuthClaims,
    Json(payload): Json<SubmitReviewPayload>,
) -> Result<Json<Review>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match submit_review(
        restroom_id,
        user_id,
        payload.ratings,
        payload.comment,
        payload.photos,
        state.postgres.clone(),
    )
    .await
    {
        Ok(review) => {
            tracing::info!("Review {} submitted by user {}", review.id, user_id);
            Ok(Json(review))
        }
        Err(err) => {
            tracing::error!("Error submitting review: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_restroom_reviews_handler(
    State(state): State<AppState>,
    Path(restroom_id): Path<Uuid>,
) -> Result<Json<Vec<ReviewWithPhotos>>, (StatusCode, String)> {
    let reviews = get_reviews_for_restroom(restroom_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching reviews: {}", e);
            e.to_response()
        })?;

    Ok(Json(reviews))
}
