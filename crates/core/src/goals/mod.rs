//! Goals module - goal planning models, service and traits.

mod goals_model;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod goals_service_tests;

pub use goals_model::{AltsBreakdown, Breakdown, EquityBreakdown, GoalPlan, NewGoalPlan};
pub use goals_service::GoalPlanService;
pub use goals_traits::GoalPlanServiceTrait;
