use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}
