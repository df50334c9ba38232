//! Tests for portfolio composition and summaries.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::allocation::{AssetCategory, RiskProfile, SubCategory};
    use crate::portfolio::{PortfolioComposer, PortfolioSummary};
    use crate::rankings::{AssetRanking, RankingSnapshot};

    fn ranked_snapshot() -> Option<Arc<RankingSnapshot>> {
        Some(Arc::new(RankingSnapshot::new(vec![
            AssetRanking::new("Large Cap", 1, Some(dec!(60))),
            AssetRanking::new("Mid Cap", 2, Some(dec!(30))),
            AssetRanking::new("Small Cap", 3, Some(dec!(10))),
            AssetRanking::new("Debt", 4, Some(dec!(8))),
            AssetRanking::new("Gold", 5, Some(dec!(6))),
            AssetRanking::new("Silver", 6, Some(dec!(4))),
        ])))
    }

    // ==================== Composition without rankings ====================

    #[test]
    fn test_compose_without_rankings() {
        let composer = PortfolioComposer::new(None);
        let rows = composer
            .compose(5, RiskProfile::Moderate, dec!(2500000), Some(32_500))
            .unwrap();

        let order: Vec<SubCategory> = rows.iter().map(|r| r.asset_class).collect();
        assert_eq!(
            order,
            vec![
                SubCategory::Debt,
                SubCategory::LargeCap,
                SubCategory::MidCap,
                SubCategory::SmallCap,
                SubCategory::Gold,
                SubCategory::Silver,
            ]
        );
        assert_eq!(rows[0].allocation, dec!(0.35));
        assert_eq!(rows[1].allocation, dec!(0.275));
        assert!(rows.iter().all(|r| r.rank.is_none() && r.score.is_none()));

        let total: Decimal = rows.iter().map(|r| r.allocation).sum();
        assert_eq!(total, Decimal::ONE);

        let amounts: Decimal = rows.iter().filter_map(|r| r.monthly_amount).sum();
        assert_eq!(amounts, dec!(32500));
        assert_eq!(rows[0].monthly_amount, Some(dec!(11375)));
    }

    #[test]
    fn test_compose_without_sip_leaves_amounts_empty() {
        let rows = PortfolioComposer::new(None)
            .compose(12, RiskProfile::Aggressive, dec!(5000000), None)
            .unwrap();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.monthly_amount.is_none()));
    }

    #[test]
    fn test_equal_allocations_keep_insertion_order() {
        let rows = PortfolioComposer::new(None)
            .compose(2, RiskProfile::Conservative, dec!(100000), None)
            .unwrap();
        let gold = rows
            .iter()
            .position(|r| r.asset_class == SubCategory::Gold)
            .unwrap();
        let silver = rows
            .iter()
            .position(|r| r.asset_class == SubCategory::Silver)
            .unwrap();
        assert_eq!(silver, gold + 1);
    }

    #[test]
    fn test_compose_rejects_zero_horizon() {
        assert!(PortfolioComposer::new(None)
            .compose(0, RiskProfile::Moderate, dec!(1000), None)
            .is_err());
    }

    // ==================== Composition with rankings ====================

    #[test]
    fn test_compose_with_rankings_attaches_rank_and_score() {
        let composer = PortfolioComposer::new(ranked_snapshot());
        let rows = composer
            .compose(10, RiskProfile::Aggressive, dec!(5000000), Some(10_000))
            .unwrap();

        let large = rows
            .iter()
            .find(|r| r.asset_class == SubCategory::LargeCap)
            .unwrap();
        assert_eq!(large.allocation, dec!(0.51));
        assert_eq!(large.rank, Some(1));
        assert_eq!(large.score, Some(dec!(60)));
        assert_eq!(large.category, AssetCategory::Equity);
        assert_eq!(large.ticker, "^NSEI");

        let debt = rows
            .iter()
            .find(|r| r.asset_class == SubCategory::Debt)
            .unwrap();
        assert_eq!(debt.allocation, dec!(0.05));
        assert_eq!(debt.rank, Some(4));

        let gold = rows
            .iter()
            .find(|r| r.asset_class == SubCategory::Gold)
            .unwrap();
        assert_eq!(gold.allocation, dec!(0.06));

        assert_eq!(rows[0].asset_class, SubCategory::LargeCap);
        let total: Decimal = rows.iter().map(|r| r.allocation).sum();
        assert_eq!(total, Decimal::ONE);
    }

    #[test]
    fn test_compose_with_oversized_scores_uses_default_split() {
        let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        let composer = PortfolioComposer::new(Some(Arc::new(RankingSnapshot::new(vec![
            AssetRanking::new("Large Cap", 1, Some(huge)),
            AssetRanking::new("Mid Cap", 2, Some(huge)),
        ]))));
        let rows = composer
            .compose(5, RiskProfile::Moderate, dec!(2500000), Some(32_500))
            .unwrap();

        let large = rows
            .iter()
            .find(|r| r.asset_class == SubCategory::LargeCap)
            .unwrap();
        assert_eq!(large.allocation, dec!(0.275));
        assert_eq!(large.score, Some(huge));
        let total: Decimal = rows.iter().map(|r| r.allocation).sum();
        assert_eq!(total, Decimal::ONE);
    }

    // ==================== Summary ====================

    #[test]
    fn test_summary_totals() {
        let rows = PortfolioComposer::new(None)
            .compose(5, RiskProfile::Moderate, dec!(2500000), Some(32_500))
            .unwrap();
        let summary = PortfolioSummary::from_rows(&rows);

        assert_eq!(summary.num_assets, 6);
        assert_eq!(summary.total_allocation, Decimal::ONE);
        assert_eq!(summary.equity_allocation, dec!(0.55));
        assert_eq!(summary.debt_allocation, dec!(0.35));
        assert_eq!(summary.alternatives_allocation, dec!(0.10));
        assert_eq!(summary.top_holding, Some(SubCategory::Debt));
        assert_eq!(summary.top_holding_allocation, Some(dec!(0.35)));
        assert_eq!(summary.total_monthly_amount, Some(dec!(32500)));
    }

    #[test]
    fn test_summary_of_empty_table() {
        let summary = PortfolioSummary::from_rows(&[]);
        assert_eq!(summary.num_assets, 0);
        assert_eq!(summary.total_allocation, Decimal::ZERO);
        assert!(summary.top_holding.is_none());
        assert!(summary.total_monthly_amount.is_none());
    }

    #[test]
    fn test_row_serialization_uses_display_names() {
        let rows = PortfolioComposer::new(None)
            .compose(5, RiskProfile::Moderate, dec!(2500000), None)
            .unwrap();
        let json = serde_json::to_value(&rows[1]).unwrap();
        assert_eq!(json["assetClass"], "Large Cap");
        assert_eq!(json["category"], "Equity");
        assert!(json["monthlyAmount"].is_null());
        assert_eq!(rows[1].allocation_percent(), dec!(27.5));
    }
}
