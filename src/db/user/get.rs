use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::badge::get::get_user_badges,
    errors::AppError,
    models::{User, user::UserProfile},
};

pub async fn get_user_by_id(user_id: Uuid, postgres: PgPool) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, points, level, created_at FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user: {}", e)))?
    .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}

pub async fn get_user_profile(user_id: Uuid, postgres: PgPool) -> Result<UserProfile, AppError> {
    let user = get_user_by_id(user_id, postgres.clone()).await?;
    let badges = get_user_badges(user_id, postgres)
        .await?
        .into_iter()
        .map(|badge| badge.code)
        .collect();

    Ok(UserProfile { user, badges })
}
