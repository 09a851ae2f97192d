use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::UserId;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// No precomputed feed is stored for the user. Recoverable: the blender
    /// records it and serves fallback items instead.
    #[error("no feed found for user {0}")]
    FeedNotFound(UserId),

    /// A blended response came out shorter than the caller asked for
    #[error("feed size {actual} does not match requested size {requested}")]
    SizeMismatch { requested: u8, actual: usize },

    /// Neither personalized nor fallback items could be produced
    #[error("no feed items available")]
    NoFeedAvailable,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::FeedNotFound(_) => StatusCode::NOT_FOUND,
            AppError::SizeMismatch { .. } | AppError::NoFeedAvailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
