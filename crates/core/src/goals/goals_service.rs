use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use crate::allocation::{allocate, RiskProfile, StrategicAllocation};
use crate::constants::{MAX_HORIZON_YEARS, MIN_HORIZON_YEARS};
use crate::errors::{Result, ValidationError};
use crate::portfolio::{PortfolioComposer, PortfolioSummary};
use crate::rankings::RankingProviderTrait;
use crate::sip::{solve_sip, ReturnAssumptions, ReturnModelTrait};

use super::goals_model::{AltsBreakdown, Breakdown, EquityBreakdown, GoalPlan, NewGoalPlan};
use super::goals_traits::GoalPlanServiceTrait;

pub struct GoalPlanService {
    ranking_provider: Arc<dyn RankingProviderTrait>,
    return_model: Arc<dyn ReturnModelTrait>,
}

impl GoalPlanService {
    pub fn new(ranking_provider: Arc<dyn RankingProviderTrait>) -> Self {
        GoalPlanService {
            ranking_provider,
            return_model: Arc::new(ReturnAssumptions::default()),
        }
    }

    /// Replaces the fixed return assumptions.
    pub fn with_return_model(mut self, return_model: Arc<dyn ReturnModelTrait>) -> Self {
        self.return_model = return_model;
        self
    }
}

impl GoalPlanServiceTrait for GoalPlanService {
    fn plan_goal(&self, new_plan: NewGoalPlan) -> Result<GoalPlan> {
        new_plan.validate()?;

        // One snapshot for the whole request, even if a reload lands meanwhile
        let snapshot = self.ranking_provider.current();
        let rankings_applied = snapshot.is_some();

        let strategic = allocate(new_plan.horizon, new_plan.risk_profile)?;
        let allocation = strategic.asset_mix();
        let sip = solve_sip(
            self.return_model.as_ref(),
            &allocation,
            new_plan.target_corpus,
            new_plan.horizon,
        );

        let composer = PortfolioComposer::new(snapshot);
        let equity = composer.tactical().equity_breakdown(strategic.equity);
        let alternatives = composer
            .tactical()
            .alternatives_breakdown(strategic.alternatives());
        let portfolio_table = composer.rows_for(
            &equity,
            strategic.debt,
            &alternatives,
            Some(sip.monthly_sip),
        );
        let summary = PortfolioSummary::from_rows(&portfolio_table);

        let mut notes = BTreeMap::new();
        notes.insert(
            "allocationBasis".to_string(),
            "Rule-based strategic split (equity/debt/gold/silver) refined by ranking scores; \
             gold and silver are reported together as alts."
                .to_string(),
        );
        notes.insert(
            "returnBasis".to_string(),
            "Fixed annual return assumptions per asset class.".to_string(),
        );
        notes.insert(
            "rankingsBasis".to_string(),
            if equity.score_driven || alternatives.score_driven {
                "Ranking scores applied to the tactical breakdown.".to_string()
            } else if rankings_applied {
                "Rankings loaded but insufficient; default tactical splits used.".to_string()
            } else {
                "No rankings loaded; default tactical splits used.".to_string()
            },
        );

        info!(
            "Planned goal: target {} over {}y ({}), expected return {}, monthly SIP {}",
            new_plan.target_corpus,
            new_plan.horizon,
            new_plan.risk_profile,
            sip.expected_return_annual,
            sip.monthly_sip
        );

        Ok(GoalPlan {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            input: new_plan,
            strategic,
            allocation,
            sip,
            breakdown: Breakdown {
                equity: EquityBreakdown::from(&equity),
                alts: AltsBreakdown::from(&alternatives),
            },
            portfolio_table,
            summary,
            notes,
        })
    }

    fn strategic_allocation(
        &self,
        horizon: u32,
        risk_profile: RiskProfile,
    ) -> Result<StrategicAllocation> {
        debug!("Strategic allocation requested for {}y {}", horizon, risk_profile);
        if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&horizon) {
            return Err(ValidationError::InvalidInput(format!(
                "horizon must be between {} and {} years, got {}",
                MIN_HORIZON_YEARS, MAX_HORIZON_YEARS, horizon
            ))
            .into());
        }
        allocate(horizon, risk_profile)
    }
}
