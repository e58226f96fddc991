use sqlx::PgPool;
use uuid::Uuid;

use crate::{errors::AppError, models::badge::Badge};

pub async fn get_user_badges(user_id: Uuid, postgres: PgPool) -> Result<Vec<Badge>, AppError> {
    let badges = sqlx::query_as::<_, Badge>(
        "SELECT b.id, b.code, b.name, b.description
        FROM badges b
        JOIN user_badges ub ON ub.badge_id = b.id
        WHERE ub.user_id = $1
        ORDER BY ub.awarded_at",
    )
    .bind(user_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch badges: {}", e)))?;

    Ok(badges)
}
