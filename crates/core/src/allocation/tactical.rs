//! Tactical breakdown of strategic buckets into sub-categories.
//!
//! Scores from the ranking snapshot drive a proportional split inside
//! each bucket. Whenever the snapshot cannot support that split the
//! engine falls back to fixed ratios instead of failing.

use std::sync::Arc;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::constants::{
    FALLBACK_GOLD_SHARE, FALLBACK_LARGE_CAP_SHARE, FALLBACK_MID_CAP_SHARE,
    FALLBACK_SILVER_SHARE, FALLBACK_SMALL_CAP_SHARE, MIN_RANKED_ALTERNATIVES,
};
use crate::errors::AllocationError;
use crate::rankings::RankingSnapshot;

use super::allocation_model::{SubAllocation, SubCategory, SubWeight};

const EQUITY_FALLBACK: [(SubCategory, Decimal); 3] = [
    (SubCategory::LargeCap, FALLBACK_LARGE_CAP_SHARE),
    (SubCategory::MidCap, FALLBACK_MID_CAP_SHARE),
    (SubCategory::SmallCap, FALLBACK_SMALL_CAP_SHARE),
];

const ALTERNATIVES_FALLBACK: [(SubCategory, Decimal); 2] = [
    (SubCategory::Gold, FALLBACK_GOLD_SHARE),
    (SubCategory::Silver, FALLBACK_SILVER_SHARE),
];

/// Splits `total` across `scored` in proportion to each score.
///
/// Non-positive scores are kept in the sum. Fails when the scores add up
/// to zero or less, or when the arithmetic leaves the `Decimal` range.
pub fn proportional_split(
    total: Decimal,
    scored: &[(SubCategory, Decimal)],
) -> Result<Vec<SubWeight>, AllocationError> {
    let score_sum = scored
        .iter()
        .try_fold(Decimal::ZERO, |acc, (_, score)| acc.checked_add(*score))
        .ok_or_else(|| {
            AllocationError::DivisionUndefined(format!(
                "score sum overflowed across {} rows",
                scored.len()
            ))
        })?;
    if score_sum <= Decimal::ZERO {
        return Err(AllocationError::DivisionUndefined(format!(
            "score sum is {} across {} rows",
            score_sum,
            scored.len()
        )));
    }

    scored
        .iter()
        .map(|(sub_category, score)| {
            score
                .checked_div(score_sum)
                .and_then(|share| total.checked_mul(share))
                .map(|fraction| SubWeight {
                    sub_category: *sub_category,
                    fraction,
                })
                .ok_or_else(|| {
                    AllocationError::DivisionUndefined(format!(
                        "weight for {} overflowed (score {}, sum {})",
                        sub_category, score, score_sum
                    ))
                })
        })
        .collect()
}

fn fixed_split(total: Decimal, shares: &[(SubCategory, Decimal)]) -> SubAllocation {
    SubAllocation {
        weights: shares
            .iter()
            .map(|(sub_category, share)| SubWeight {
                sub_category: *sub_category,
                fraction: total * *share,
            })
            .collect(),
        score_driven: false,
    }
}

/// Breaks equity and alternatives down using one ranking snapshot.
#[derive(Debug, Clone, Default)]
pub struct TacticalAllocator {
    rankings: Option<Arc<RankingSnapshot>>,
}

impl TacticalAllocator {
    pub fn new(rankings: Option<Arc<RankingSnapshot>>) -> Self {
        Self { rankings }
    }

    pub fn rankings(&self) -> Option<&RankingSnapshot> {
        self.rankings.as_deref()
    }

    /// Splits the equity fraction into Large, Mid and Small Cap.
    ///
    /// Falls back to 50/30/20 without a snapshot, without any ranked
    /// equity row, or when the equity scores sum to zero or less.
    pub fn equity_breakdown(&self, total_equity: Decimal) -> SubAllocation {
        self.breakdown(total_equity, &SubCategory::EQUITY, 1, &EQUITY_FALLBACK)
    }

    /// Splits gold + silver. Needs both metals ranked, else 50/50.
    pub fn alternatives_breakdown(&self, total_alternatives: Decimal) -> SubAllocation {
        self.breakdown(
            total_alternatives,
            &SubCategory::ALTERNATIVES,
            MIN_RANKED_ALTERNATIVES,
            &ALTERNATIVES_FALLBACK,
        )
    }

    fn breakdown(
        &self,
        total: Decimal,
        wanted: &[SubCategory],
        min_rows: usize,
        fallback: &[(SubCategory, Decimal)],
    ) -> SubAllocation {
        let Some(snapshot) = self.rankings.as_deref() else {
            debug!("No rankings available, using default split for {:?}", wanted);
            return fixed_split(total, fallback);
        };

        let scored: Vec<(SubCategory, Decimal)> = snapshot
            .matching(wanted)
            .into_iter()
            .filter_map(|row| {
                row.asset_class
                    .parse::<SubCategory>()
                    .ok()
                    .map(|sub_category| (sub_category, row.score_or_zero()))
            })
            .collect();

        if scored.is_empty() || scored.len() < min_rows {
            warn!(
                "Only {} ranked rows for {:?} (need {}), using default split",
                scored.len(),
                wanted,
                min_rows.max(1)
            );
            return fixed_split(total, fallback);
        }

        match proportional_split(total, &scored) {
            Ok(weights) => SubAllocation {
                weights,
                score_driven: true,
            },
            Err(e) => {
                warn!("{}; using default split for {:?}", e, wanted);
                fixed_split(total, fallback)
            }
        }
    }
}
