//! Composed portfolio table models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::allocation::{AssetCategory, SubCategory};

/// One line of the recommended portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRow {
    pub asset_class: SubCategory,
    pub category: AssetCategory,
    /// Representative instrument for the line
    pub ticker: String,
    /// Fraction of the whole portfolio (0-1)
    pub allocation: Decimal,
    /// Share of the monthly SIP, when a SIP amount was supplied
    pub monthly_amount: Option<Decimal>,
    pub rank: Option<u32>,
    pub score: Option<Decimal>,
}

impl PortfolioRow {
    /// Allocation expressed as a percentage (0-100).
    pub fn allocation_percent(&self) -> Decimal {
        self.allocation.saturating_mul(dec!(100))
    }
}

/// Aggregate figures over a composed portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_allocation: Decimal,
    pub num_assets: usize,
    pub equity_allocation: Decimal,
    pub debt_allocation: Decimal,
    pub alternatives_allocation: Decimal,
    pub top_holding: Option<SubCategory>,
    pub top_holding_allocation: Option<Decimal>,
    /// Sum of monthly amounts, `None` when no row carries one
    pub total_monthly_amount: Option<Decimal>,
}

impl PortfolioSummary {
    /// Summarises `rows`, which are expected sorted by allocation descending.
    pub fn from_rows(rows: &[PortfolioRow]) -> Self {
        let category_total = |category: AssetCategory| -> Decimal {
            rows.iter()
                .filter(|r| r.category == category)
                .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.allocation))
        };

        let amounts: Vec<Decimal> = rows.iter().filter_map(|r| r.monthly_amount).collect();
        let total_monthly_amount: Option<Decimal> = if amounts.is_empty() {
            None
        } else {
            Some(
                amounts
                    .iter()
                    .fold(Decimal::ZERO, |acc, a| acc.saturating_add(*a)),
            )
        };

        let top = rows.first();
        Self {
            total_allocation: rows
                .iter()
                .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.allocation)),
            num_assets: rows.len(),
            equity_allocation: category_total(AssetCategory::Equity),
            debt_allocation: category_total(AssetCategory::Debt),
            alternatives_allocation: category_total(AssetCategory::Alternatives),
            top_holding: top.map(|r| r.asset_class),
            top_holding_allocation: top.map(|r| r.allocation),
            total_monthly_amount,
        }
    }
}
