use crate::models::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderBoard {
    pub user: User,
    pub rank: u64,
    pub total_reviews: i64,
}
