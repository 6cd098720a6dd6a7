use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/day", get(handlers::get_day))
        .route("/api/day/previous", post(handlers::previous_day))
        .route("/api/day/next", post(handlers::next_day))
        .route("/api/day/reload", post(handlers::reload_day))
        .route("/nba_logos/:file", get(handlers::logo))
        .with_state(state)
}
