//! Goalfolio Core - goal-based allocation engine.
//!
//! This crate turns a savings goal (target corpus, horizon, risk profile)
//! into a strategic asset split, a ranking-driven tactical breakdown, an
//! expected return and the monthly contribution needed to reach the goal.
//! It performs no I/O beyond loading a ranking snapshot on request.

pub mod allocation;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod portfolio;
pub mod rankings;
pub mod sip;

// Re-export the types most callers need
pub use allocation::{
    AssetCategory, HorizonBucket, RiskProfile, StrategicAllocation, SubAllocation, SubCategory,
    TacticalAllocator,
};
pub use portfolio::{PortfolioComposer, PortfolioRow, PortfolioSummary};
pub use rankings::{AssetRanking, RankingProviderTrait, RankingSnapshot, RankingStore};
pub use sip::{AssetMix, ReturnAssumptions, ReturnModelTrait, SipResult};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
