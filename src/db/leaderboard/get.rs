use sqlx::{FromRow, PgPool};

use crate::{
    errors::AppError,
    models::{User, leaderboard::LeaderBoard},
};

const LEADERBOARD_SIZE: i64 = 50;

#[derive(FromRow)]
struct LeaderboardRow {
    #[sqlx(flatten)]
    user: User,
    total_reviews: i64,
}

pub async fn get_leaderboard(postgres: PgPool) -> Result<Vec<LeaderBoard>, AppError> {
    let rows = sqlx::query_as::<_, LeaderboardRow>(
        "SELECT u.id, u.username, u.points, u.level, u.created_at,
            COUNT(r.id) AS total_reviews
        FROM users u
        LEFT JOIN reviews r ON r.user_id = u.id
        GROUP BY u.id
        ORDER BY u.points DESC, u.username ASC
        LIMIT $1",
    )
    .bind(LEADERBOARD_SIZE)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch leaderboard: {}", e)))?;

    // Assign ranks after the sort
    Ok(rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| LeaderBoard {
            user: row.user,
            rank: (index + 1) as u64,
            total_reviews: row.total_reviews,
        })
        .collect())
}
