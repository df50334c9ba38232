use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::ReloadResponse,
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use goalfolio_core::rankings::{RankingProviderTrait, RankingSnapshot};

#[utoipa::path(
    get,
    path = "/api/v1/rankings",
    responses((status = 200, description = "Active ranking snapshot"), (status = 404, description = "No rankings loaded"))
)]
pub async fn get_rankings(State(state): State<Arc<AppState>>) -> ApiResult<Json<RankingSnapshot>> {
    let snapshot = state.ranking_store.current().ok_or(ApiError::NotFound)?;
    Ok(Json(snapshot.as_ref().clone()))
}

#[utoipa::path(
    post,
    path = "/api/v1/rankings/reload",
    responses((status = 200, description = "Reload outcome", body = ReloadResponse), (status = 400, description = "No rankings path configured"))
)]
pub async fn reload_rankings(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ReloadResponse>> {
    let path = state.rankings_path.clone().ok_or_else(|| {
        ApiError::BadRequest("GF_RANKINGS_PATH is not configured".to_string())
    })?;

    let store = state.ranking_store.clone();
    let current = tokio::task::spawn_blocking(move || store.reload_from(&path))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    let rows = current.as_ref().map(|s| s.len()).unwrap_or(0);
    tracing::info!("Rankings reloaded ({} assets)", rows);
    Ok(Json(ReloadResponse {
        loaded: current.is_some(),
        rows,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rankings", get(get_rankings))
        .route("/rankings/reload", post(reload_rankings))
}
