use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

/// Additive update at the storage layer. Concurrent contributions by the
/// same user must not lose increments, so the read-modify-write never
/// happens in application code.
pub async fn add_points(user_id: Uuid, amount: i64, postgres: PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>(
        "UPDATE users SET points = points + $2 WHERE id = $1 RETURNING points",
    )
    .bind(user_id)
    .bind(amount)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to add points: {}", e)))?
    .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}

/// The stored level only ever goes up; GREATEST keeps a stale caller from
/// writing a lower value back.
pub async fn raise_level(user_id: Uuid, level: i32, postgres: PgPool) -> Result<i32, AppError> {
    sqlx::query_scalar::<_, i32>(
        "UPDATE users SET level = GREATEST(level, $2) WHERE id = $1 RETURNING level",
    )
    .bind(user_id)
    .bind(level)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update level: {}", e)))?
    .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}
