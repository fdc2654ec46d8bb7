use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/range", get(handlers::get_range))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/profiles", get(handlers::get_profiles))
        .with_state(state)
}
