use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        add_restroom_handler, create_user_handler, get_leaderboard_handler,
        get_restroom_reviews_handler, get_restrooms_handler, get_user_handler,
        submit_review_handler,
    },
    middleware::{create_auth_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let auth_rate_limiter = create_auth_rate_limiter();

    let account_routes = Router::new()
        .route("/users", post(create_user_handler))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(auth_rate_limiter.clone(), req, next)
        }));

    Router::new()
        .merge(account_routes)
        .route("/users/{id}", get(get_user_handler))
        .route(
            "/restrooms",
            get(get_restrooms_handler).post(add_restroom_handler),
        )
        .route(
            "/restrooms/{id}/reviews",
            get(get_restroom_reviews_handler).post(submit_review_handler),
        )
        .route("/leaderboard", get(get_leaderboard_handler))
        .with_state(state)
}
