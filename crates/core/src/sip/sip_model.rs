//! Return and contribution models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_RETURN_DEBT, DEFAULT_RETURN_EQUITY, DEFAULT_RETURN_PRECIOUS_METALS,
    DEFAULT_RETURN_REAL_ESTATE,
};

/// Three-bucket allocation used for return estimation.
///
/// Buckets missing from serialized input read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetMix {
    pub equity: Decimal,
    pub debt: Decimal,
    pub alts: Decimal,
}

/// Expected return and the monthly contribution derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipResult {
    /// Annual expected return, e.g. 0.097 for 9.7%
    pub expected_return_annual: Decimal,
    /// Rounded to the nearest 100
    pub monthly_sip: u64,
}

/// Produces an expected annual return for an asset mix.
///
/// Swap the implementation to plug in data-driven return estimates.
pub trait ReturnModelTrait: Send + Sync {
    fn expected_return(&self, mix: &AssetMix) -> Decimal;
}

/// Fixed per-bucket annual return assumptions.
///
/// The alternatives rate is the plain average of a real-estate-like and a
/// precious-metals-like component. It ignores the gold/silver split chosen
/// by the tactical breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnAssumptions {
    pub equity: Decimal,
    pub debt: Decimal,
    pub alternatives: Decimal,
}

impl Default for ReturnAssumptions {
    fn default() -> Self {
        Self {
            equity: DEFAULT_RETURN_EQUITY,
            debt: DEFAULT_RETURN_DEBT,
            alternatives: (DEFAULT_RETURN_REAL_ESTATE + DEFAULT_RETURN_PRECIOUS_METALS)
                / Decimal::TWO,
        }
    }
}

impl ReturnModelTrait for ReturnAssumptions {
    fn expected_return(&self, mix: &AssetMix) -> Decimal {
        mix.equity * self.equity + mix.debt * self.debt + mix.alts * self.alternatives
    }
}
