use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::{badge::post::award_badge, review::get::count_reviews_by_user, user::patch},
    errors::AppError,
};

pub const POINTS_PER_LEVEL: i64 = 100;
pub const REVIEW_SUBMITTED_POINTS: i64 = 10;
pub const RESTROOM_ADDED_POINTS: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionKind {
    ReviewSubmitted,
    RestroomAdded,
}

impl ContributionKind {
    pub fn points(&self) -> i64 {
        match self {
            ContributionKind::ReviewSubmitted => REVIEW_SUBMITTED_POINTS,
            ContributionKind::RestroomAdded => RESTROOM_ADDED_POINTS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionKind::ReviewSubmitted => "review_submitted",
            ContributionKind::RestroomAdded => "restroom_added",
        }
    }
}

/// Level is fully determined by points; the stored column is a cache of this.
pub fn level_for_points(points: i64) -> i32 {
    (points / POINTS_PER_LEVEL) as i32 + 1
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub points: i64,
    pub level: i32,
}

/// Apply one contribution event: atomic point increment at the storage
/// layer, then raise the stored level if the new total crossed a threshold.
/// The triggering action has already committed; callers log failures from
/// here instead of unwinding it.
pub async fn record_contribution(
    user_id: Uuid,
    kind: ContributionKind,
    postgres: PgPool,
) -> Result<Progression, AppError> {
    let points = patch::add_points(user_id, kind.points(), postgres.clone())
        .await
        .map_err(|e| AppError::ProgressionUpdateFailed(e.to_string()))?;

    let level = patch::raise_level(user_id, level_for_points(points), postgres)
        .await
        .map_err(|e| AppError::ProgressionUpdateFailed(e.to_string()))?;

    tracing::info!(
        "Recorded {} for user {}: points={}, level={}",
        kind.as_str(),
        user_id,
        points,
        level
    );

    Ok(Progression { points, level })
}

/// Review-count achievements. Awards are idempotent, so re-checking a
/// threshold the user already crossed is harmless.
pub async fn check_review_achievements(user_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let total = count_reviews_by_user(user_id, postgres.clone())
        .await
        .map_err(|e| AppError::ProgressionUpdateFailed(e.to_string()))?;

    if total >= 1 {
        grant_badge(user_id, "first_review", postgres.clone()).await?;
    }
    if total >= 10 {
        grant_badge(user_id, "ten_reviews", postgres).await?;
    }

    Ok(())
}

pub async fn check_restroom_achievements(user_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    grant_badge(user_id, "first_restroom", postgres).await
}

async fn grant_badge(user_id: Uuid, code: &str, postgres: PgPool) -> Result<(), AppError> {
    let newly_awarded = award_badge(user_id, code, postgres)
        .await
        .map_err(|e| AppError::ProgressionUpdateFailed(e.to_string()))?;

    if newly_awarded {
        tracing::info!("Awarded badge '{}' to user {}", code, user_id);
    }

    Ok(())
}
