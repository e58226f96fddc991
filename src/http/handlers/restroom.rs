use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    db::restroom::{get::get_restrooms_in_bounds, post::add_restroom},
    models::restroom::Restroom,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRestroomPayload {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub directions: Option<String>,
}

pub async fn add_restroom_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<AddRestroomPayload>,
) -> Result<Json<Restroom>, (StatusCode, String)> {
    let user_id = claims.user_id()?;

    match add_restroom(
        payload.name,
        payload.latitude,
        payload.longitude,
        payload.directions,
        user_id,
        state.postgres.clone(),
    )
    .await
    {
        Ok(restroom) => {
            tracing::info!("Restroom created: {} (ID: {})", restroom.name, restroom.id);
            Ok(Json(restroom))
        }
        Err(err) => {
            tracing::error!("Error creating restroom: {}", err);
            Err(err.to_response())
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsQuery {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

pub async fn get_restrooms_handler(
    State(state): State<AppState>,
    Query(bounds): Query<BoundsQuery>,
) -> Result<Json<Vec<Restroom>>, (StatusCode, String)> {
    let restrooms = get_restrooms_in_bounds(
        bounds.min_lat,
        bounds.max_lat,
        bounds.min_lng,
        bounds.max_lng,
        state.postgres.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Error fetching restrooms: {}", e);
        e.to_response()
    })?;

    Ok(Json(restrooms))
}
