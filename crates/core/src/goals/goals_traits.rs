use crate::allocation::{RiskProfile, StrategicAllocation};
use crate::errors::Result;
use crate::goals::goals_model::{GoalPlan, NewGoalPlan};

/// Trait for goal planning operations
pub trait GoalPlanServiceTrait: Send + Sync {
    /// Validates the input and builds the full plan against one ranking snapshot.
    fn plan_goal(&self, new_plan: NewGoalPlan) -> Result<GoalPlan>;

    /// Strategic grid entry for a horizon and risk profile.
    fn strategic_allocation(
        &self,
        horizon: u32,
        risk_profile: RiskProfile,
    ) -> Result<StrategicAllocation>;
}
