use crate::pager::DateKey;
use axum::http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchReason {
    Missing,
    Io(String),
    Parse(String),
}

/// A day's slate could not be read; the caller keeps what it already shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub key: DateKey,
    pub reason: FetchReason,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            FetchReason::Missing => write!(f, "no slate published for {}", self.key),
            FetchReason::Io(err) => write!(f, "failed to read slate for {}: {err}", self.key),
            FetchReason::Parse(err) => write!(f, "failed to parse slate for {}: {err}", self.key),
        }
    }
}

impl std::error::Error for FetchFailure {}
