use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

/// Idempotent award: granting a badge the user already holds is a no-op,
/// never an error and never a second row. Returns whether a new row was
/// written.
pub async fn award_badge(user_id: Uuid, code: &str, postgres: PgPool) -> Result<bool, AppError> {
    let badge_id = sqlx::query_scalar::<_, Uuid>("SELECT id FROM badges WHERE code = $1")
        .bind(code)
        .fetch_optional(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to look up badge: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("Badge '{}' not found", code)))?;

    let result = sqlx::query(
        "INSERT INTO user_badges (user_id, badge_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
    )
    .bind(user_id)
    .bind(badge_id)
    .execute(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to award badge: {}", e)))?;

    Ok(result.rows_affected() > 0)
}
