use crate::errors::AppError;
use crate::models::DayView;
use crate::state::AppState;
use crate::ui::INDEX_HTML;
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use tokio::fs;
use tracing::debug;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn get_day(State(state): State<AppState>) -> Json<DayView> {
    let navigator = state.navigator.lock().await;
    Json(navigator.view())
}

pub async fn previous_day(State(state): State<AppState>) -> Json<DayView> {
    let ticket = state.navigator.lock().await.step_backward();
    Json(state.fetch(ticket).await)
}

pub async fn next_day(State(state): State<AppState>) -> Json<DayView> {
    let ticket = {
        let mut navigator = state.navigator.lock().await;
        match navigator.step_forward() {
            Some(ticket) => ticket,
            None => return Json(navigator.view()),
        }
    };
    Json(state.fetch(ticket).await)
}

pub async fn reload_day(State(state): State<AppState>) -> Json<DayView> {
    Json(state.reload().await)
}

pub async fn logo(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if file.contains(['/', '\\']) || file.starts_with('.') || !file.ends_with(".png") {
        return Err(AppError::bad_request("invalid logo name"));
    }

    let path = state.logo_dir.join(&file);
    match fs::read(&path).await {
        Ok(bytes) => Ok(([(header::CONTENT_TYPE, "image/png")], bytes)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("no logo at {}", path.display());
            Err(AppError::not_found(format!("no logo named {file}")))
        }
        Err(err) => Err(err.into()),
    }
}
