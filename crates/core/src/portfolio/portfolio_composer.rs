//! Assembles strategic and tactical outputs into the portfolio table.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::allocation::{
    allocate, RiskProfile, StrategicAllocation, SubAllocation, SubCategory, TacticalAllocator,
};
use crate::errors::Result;
use crate::rankings::RankingSnapshot;

use super::portfolio_model::PortfolioRow;

/// Builds portfolio tables against a single ranking snapshot.
#[derive(Debug, Clone, Default)]
pub struct PortfolioComposer {
    tactical: TacticalAllocator,
}

impl PortfolioComposer {
    pub fn new(rankings: Option<Arc<RankingSnapshot>>) -> Self {
        Self {
            tactical: TacticalAllocator::new(rankings),
        }
    }

    pub fn tactical(&self) -> &TacticalAllocator {
        &self.tactical
    }

    /// Full table for a goal: strategic grid, tactical breakdown, ranks and
    /// per-line monthly amounts, sorted by allocation descending.
    pub fn compose(
        &self,
        horizon_years: u32,
        risk_profile: RiskProfile,
        target_corpus: Decimal,
        monthly_sip: Option<u64>,
    ) -> Result<Vec<PortfolioRow>> {
        debug!(
            "Composing portfolio: horizon {}y, risk {}, target {}, sip {:?}",
            horizon_years, risk_profile, target_corpus, monthly_sip
        );
        let strategic = allocate(horizon_years, risk_profile)?;
        Ok(self.compose_from(&strategic, monthly_sip))
    }

    /// Same as [`compose`](Self::compose) for an already computed strategic split.
    pub fn compose_from(
        &self,
        strategic: &StrategicAllocation,
        monthly_sip: Option<u64>,
    ) -> Vec<PortfolioRow> {
        let equity = self.tactical.equity_breakdown(strategic.equity);
        let alternatives = self.tactical.alternatives_breakdown(strategic.alternatives());
        self.rows_for(&equity, strategic.debt, &alternatives, monthly_sip)
    }

    /// Table from breakdowns that were computed separately.
    pub fn rows_for(
        &self,
        equity: &SubAllocation,
        debt: Decimal,
        alternatives: &SubAllocation,
        monthly_sip: Option<u64>,
    ) -> Vec<PortfolioRow> {
        let sip = monthly_sip.map(Decimal::from);

        let mut rows: Vec<PortfolioRow> = equity
            .iter()
            .map(|w| (w.sub_category, w.fraction))
            .chain(std::iter::once((SubCategory::Debt, debt)))
            .chain(alternatives.iter().map(|w| (w.sub_category, w.fraction)))
            .map(|(sub_category, allocation)| self.row(sub_category, allocation, sip))
            .collect();

        // Stable: equal allocations keep insertion order
        rows.sort_by(|a, b| b.allocation.cmp(&a.allocation));
        rows
    }

    fn row(
        &self,
        sub_category: SubCategory,
        allocation: Decimal,
        monthly_sip: Option<Decimal>,
    ) -> PortfolioRow {
        let ranking = self
            .tactical
            .rankings()
            .and_then(|s| s.find(sub_category.as_str()));

        PortfolioRow {
            asset_class: sub_category,
            category: sub_category.category(),
            ticker: sub_category.ticker().to_string(),
            allocation,
            monthly_amount: monthly_sip.map(|sip| sip.saturating_mul(allocation)),
            rank: ranking.map(|r| r.rank),
            score: ranking.and_then(|r| r.hybrid_score),
        }
    }
}
