use sqlx::PgPool;

use crate::{auth::generate_jwt, errors::AppError, models::User};

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub async fn create_user(username: String, postgres: PgPool) -> Result<String, AppError> {
    let username = username.trim().to_string();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username must not be empty".into()));
    }

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username)
        VALUES ($1)
        RETURNING id, username, points, level, created_at",
    )
    .bind(&username)
    .fetch_one(&postgres)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::BadRequest(format!("Username '{}' is already taken", username))
        } else {
            AppError::DatabaseError(format!("Failed to create user: {}", e))
        }
    })?;

    let token = generate_jwt(&user)?;
    Ok(token)
}
