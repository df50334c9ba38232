use goalfolio_core::goals::NewGoalPlan;
use goalfolio_core::RiskProfile;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

/// Goal submitted for planning.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub target_corpus: Decimal,
    pub horizon: u32,
    /// One of Conservative, Moderate, Aggressive
    pub risk_profile: String,
}

impl TryFrom<PlanRequest> for NewGoalPlan {
    type Error = ApiError;

    fn try_from(req: PlanRequest) -> Result<Self, Self::Error> {
        Ok(NewGoalPlan {
            target_corpus: req.target_corpus,
            horizon: req.horizon,
            risk_profile: req.risk_profile.parse::<RiskProfile>()?,
        })
    }
}

#[derive(Deserialize, IntoParams, Debug)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StrategicQuery {
    pub horizon: u32,
    pub risk_profile: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub loaded: bool,
    pub rows: usize,
}
