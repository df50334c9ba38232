//! Goal planning domain models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::{RiskProfile, StrategicAllocation, SubAllocation, SubCategory};
use crate::constants::{MAX_HORIZON_YEARS, MAX_TARGET_CORPUS, MIN_HORIZON_YEARS};
use crate::errors::{Result, ValidationError};
use crate::portfolio::{PortfolioRow, PortfolioSummary};
use crate::sip::{AssetMix, SipResult};

/// Input model for planning a new goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalPlan {
    pub target_corpus: Decimal,
    /// Years until the goal, 1 to 30
    pub horizon: u32,
    pub risk_profile: RiskProfile,
}

impl NewGoalPlan {
    pub fn validate(&self) -> Result<()> {
        if self.target_corpus <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "target corpus must be positive, got {}",
                self.target_corpus
            ))
            .into());
        }
        if self.target_corpus > MAX_TARGET_CORPUS {
            return Err(ValidationError::InvalidInput(format!(
                "target corpus must not exceed {}, got {}",
                MAX_TARGET_CORPUS, self.target_corpus
            ))
            .into());
        }
        if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&self.horizon) {
            return Err(ValidationError::InvalidInput(format!(
                "horizon must be between {} and {} years, got {}",
                MIN_HORIZON_YEARS, MAX_HORIZON_YEARS, self.horizon
            ))
            .into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityBreakdown {
    pub large_cap: Decimal,
    pub mid_cap: Decimal,
    pub small_cap: Decimal,
}

impl From<&SubAllocation> for EquityBreakdown {
    fn from(split: &SubAllocation) -> Self {
        Self {
            large_cap: split.get(SubCategory::LargeCap),
            mid_cap: split.get(SubCategory::MidCap),
            small_cap: split.get(SubCategory::SmallCap),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AltsBreakdown {
    pub gold: Decimal,
    pub silver: Decimal,
}

impl From<&SubAllocation> for AltsBreakdown {
    fn from(split: &SubAllocation) -> Self {
        Self {
            gold: split.get(SubCategory::Gold),
            silver: split.get(SubCategory::Silver),
        }
    }
}

/// Tactical breakdown of the equity and alternatives buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub equity: EquityBreakdown,
    pub alts: AltsBreakdown,
}

/// Complete recommendation for one goal. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlan {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub input: NewGoalPlan,
    pub strategic: StrategicAllocation,
    /// Strategic split with gold and silver folded into `alts`
    pub allocation: AssetMix,
    pub sip: SipResult,
    pub breakdown: Breakdown,
    pub portfolio_table: Vec<PortfolioRow>,
    pub summary: PortfolioSummary,
    pub notes: BTreeMap<String, String>,
}
