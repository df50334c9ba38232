//! Ranking snapshot domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::SubCategory;

/// One ranked asset sub-category as produced by the external scorer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetRanking {
    /// Sub-category name, e.g. "Large Cap" or "Gold"
    #[serde(alias = "asset_class")]
    pub asset_class: String,
    /// 1-based rank, lower is better
    pub rank: u32,
    /// Hybrid score; rows without a score weigh zero in proportional splits
    #[serde(default, alias = "hybrid_score")]
    pub hybrid_score: Option<Decimal>,
}

impl AssetRanking {
    pub fn new(asset_class: impl Into<String>, rank: u32, hybrid_score: Option<Decimal>) -> Self {
        Self {
            asset_class: asset_class.into(),
            rank,
            hybrid_score,
        }
    }

    /// Score used for weighting. Missing scores count as zero.
    pub fn score_or_zero(&self) -> Decimal {
        self.hybrid_score.unwrap_or(Decimal::ZERO)
    }
}

/// Immutable, ordered set of rankings loaded once and shared by reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankingSnapshot {
    rankings: Vec<AssetRanking>,
    loaded_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    source: Option<String>,
}

impl RankingSnapshot {
    pub fn new(rankings: Vec<AssetRanking>) -> Self {
        Self {
            rankings,
            loaded_at: Utc::now(),
            source: None,
        }
    }

    /// Tags the snapshot with where it came from (file path, feed name, ...).
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn rows(&self) -> &[AssetRanking] {
        &self.rankings
    }

    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// First row recorded for `asset_class`.
    pub fn find(&self, asset_class: &str) -> Option<&AssetRanking> {
        self.rankings.iter().find(|r| r.asset_class == asset_class)
    }

    /// Rows whose asset class is one of `wanted`, in snapshot order.
    ///
    /// Only the first row per asset class is returned so that proportional
    /// weights always add up to one.
    pub fn matching(&self, wanted: &[SubCategory]) -> Vec<&AssetRanking> {
        let mut matched: Vec<&AssetRanking> = Vec::with_capacity(wanted.len());
        for row in &self.rankings {
            let requested = wanted.iter().any(|s| s.as_str() == row.asset_class);
            let duplicate = matched.iter().any(|m| m.asset_class == row.asset_class);
            if requested && !duplicate {
                matched.push(row);
            }
        }
        matched
    }
}
