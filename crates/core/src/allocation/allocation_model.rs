//! Allocation domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{MEDIUM_TERM_LIMIT_YEARS, SHORT_TERM_LIMIT_YEARS};
use crate::errors::{Error, ValidationError};
use crate::sip::AssetMix;

/// Investor risk appetite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskProfile::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown risk profile '{}'; expected Conservative, Moderate or Aggressive",
                    s
                )))
            })
    }
}

/// Discretised investment horizon. Derived from years, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizonBucket {
    /// Fewer than 3 years
    #[serde(rename = "lt3")]
    ShortTerm,
    /// 3 to 7 years inclusive
    #[serde(rename = "3to7")]
    MediumTerm,
    /// More than 7 years
    #[serde(rename = "gt7")]
    LongTerm,
}

impl HorizonBucket {
    pub fn from_years(horizon_years: u32) -> Self {
        if horizon_years < SHORT_TERM_LIMIT_YEARS {
            HorizonBucket::ShortTerm
        } else if horizon_years <= MEDIUM_TERM_LIMIT_YEARS {
            HorizonBucket::MediumTerm
        } else {
            HorizonBucket::LongTerm
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HorizonBucket::ShortTerm => "lt3",
            HorizonBucket::MediumTerm => "3to7",
            HorizonBucket::LongTerm => "gt7",
        }
    }
}

/// Coarse split across the four strategic buckets. Fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicAllocation {
    pub equity: Decimal,
    pub debt: Decimal,
    pub gold: Decimal,
    pub silver: Decimal,
}

impl StrategicAllocation {
    pub fn total(&self) -> Decimal {
        self.equity + self.debt + self.gold + self.silver
    }

    /// Gold and silver combined.
    pub fn alternatives(&self) -> Decimal {
        self.gold + self.silver
    }

    /// Three-bucket view used for return estimation.
    pub fn asset_mix(&self) -> AssetMix {
        AssetMix {
            equity: self.equity,
            debt: self.debt,
            alts: self.alternatives(),
        }
    }
}

/// Top-level category a portfolio line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    Equity,
    Debt,
    Alternatives,
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Equity => "Equity",
            AssetCategory::Debt => "Debt",
            AssetCategory::Alternatives => "Alternatives",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instrument class within a category. Names match ranking rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubCategory {
    #[serde(rename = "Large Cap")]
    LargeCap,
    #[serde(rename = "Mid Cap")]
    MidCap,
    #[serde(rename = "Small Cap")]
    SmallCap,
    Debt,
    Gold,
    Silver,
}

impl SubCategory {
    pub const EQUITY: [SubCategory; 3] = [
        SubCategory::LargeCap,
        SubCategory::MidCap,
        SubCategory::SmallCap,
    ];

    pub const ALTERNATIVES: [SubCategory; 2] = [SubCategory::Gold, SubCategory::Silver];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubCategory::LargeCap => "Large Cap",
            SubCategory::MidCap => "Mid Cap",
            SubCategory::SmallCap => "Small Cap",
            SubCategory::Debt => "Debt",
            SubCategory::Gold => "Gold",
            SubCategory::Silver => "Silver",
        }
    }

    pub fn category(&self) -> AssetCategory {
        match self {
            SubCategory::LargeCap | SubCategory::MidCap | SubCategory::SmallCap => {
                AssetCategory::Equity
            }
            SubCategory::Debt => AssetCategory::Debt,
            SubCategory::Gold | SubCategory::Silver => AssetCategory::Alternatives,
        }
    }

    /// Representative listed instrument for this sub-category.
    pub fn ticker(&self) -> &'static str {
        match self {
            SubCategory::LargeCap => "^NSEI",
            SubCategory::MidCap => "MID150BEES.NS",
            SubCategory::SmallCap => "BSE-SMLCAP.BO",
            SubCategory::Debt => "LIQUIDBEES.NS",
            SubCategory::Gold => "GOLDBEES.NS",
            SubCategory::Silver => "SILVERBEES.NS",
        }
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            SubCategory::LargeCap,
            SubCategory::MidCap,
            SubCategory::SmallCap,
            SubCategory::Debt,
            SubCategory::Gold,
            SubCategory::Silver,
        ]
        .into_iter()
        .find(|c| c.as_str() == s)
        .ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown sub-category '{}'",
                s
            )))
        })
    }
}

/// Share of the portfolio assigned to one sub-category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubWeight {
    pub sub_category: SubCategory,
    pub fraction: Decimal,
}

/// How a bucket's fraction is spread over its sub-categories.
///
/// Entries sum to the parent bucket's fraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAllocation {
    pub weights: Vec<SubWeight>,
    /// True when ranking scores drove the split, false for the fixed fallback
    pub score_driven: bool,
}

impl SubAllocation {
    pub fn total(&self) -> Decimal {
        self.weights
            .iter()
            .fold(Decimal::ZERO, |acc, w| acc.saturating_add(w.fraction))
    }

    /// Fraction assigned to `sub_category`, zero when absent.
    pub fn get(&self, sub_category: SubCategory) -> Decimal {
        self.weights
            .iter()
            .find(|w| w.sub_category == sub_category)
            .map(|w| w.fraction)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubWeight> {
        self.weights.iter()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
