use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppResult;
use crate::models::{ItemId, UserId};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    /// Items to return; zero or absent means the default page size.
    #[serde(default)]
    pub size: u8,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub users: usize,
    pub exceed_count: u64,
    pub exceed_fraction: f64,
    pub feed_errors: u64,
    pub as_of: DateTime<Utc>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Returns the next feed page for a user as a bare JSON array of item ids.
pub async fn get_feed(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Query(params): Query<FeedParams>,
) -> AppResult<Json<Vec<ItemId>>> {
    let items = state.feed_service.retrieve_feed(user_id, params.size).await?;
    Ok(Json(items))
}

/// Operational counters for dashboards and smoke checks.
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let (exceed_count, exceed_fraction) = state.store.percentile_exceed();
    Json(StatsResponse {
        users: state.store.user_count(),
        exceed_count,
        exceed_fraction,
        feed_errors: state.metrics.errors_recorded(),
        as_of: Utc::now(),
    })
}
