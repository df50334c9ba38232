use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{PlanRequest, StrategicQuery},
};
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use goalfolio_core::goals::{GoalPlan, NewGoalPlan};
use goalfolio_core::{RiskProfile, StrategicAllocation};

#[utoipa::path(
    post,
    path = "/api/v1/plans",
    request_body = PlanRequest,
    responses((status = 200, description = "Goal plan"), (status = 400, description = "Invalid goal"))
)]
pub async fn create_plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRequest>,
) -> ApiResult<Json<GoalPlan>> {
    let new_plan = NewGoalPlan::try_from(request)?;
    let plan = state.goal_plan_service.plan_goal(new_plan)?;
    Ok(Json(plan))
}

#[utoipa::path(
    get,
    path = "/api/v1/allocations/strategic",
    params(StrategicQuery),
    responses((status = 200, description = "Strategic allocation"), (status = 400, description = "Invalid query"))
)]
pub async fn get_strategic_allocation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StrategicQuery>,
) -> ApiResult<Json<StrategicAllocation>> {
    let risk_profile = query.risk_profile.parse::<RiskProfile>()?;
    let allocation = state
        .goal_plan_service
        .strategic_allocation(query.horizon, risk_profile)?;
    Ok(Json(allocation))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plans", post(create_plan))
        .route("/allocations/strategic", get(get_strategic_allocation))
}
