//! Tests for the goal planning service.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::allocation::RiskProfile;
    use crate::constants::MAX_TARGET_CORPUS;
    use crate::errors::{Error, ValidationError};
    use crate::goals::{GoalPlanService, GoalPlanServiceTrait, NewGoalPlan};
    use crate::rankings::{AssetRanking, RankingSnapshot, RankingStore};
    use crate::sip::{AssetMix, ReturnModelTrait};

    fn service_with(snapshot: Option<RankingSnapshot>) -> (GoalPlanService, Arc<RankingStore>) {
        let store = Arc::new(RankingStore::new(snapshot));
        (GoalPlanService::new(store.clone()), store)
    }

    fn moderate_goal() -> NewGoalPlan {
        NewGoalPlan {
            target_corpus: dec!(2500000),
            horizon: 5,
            risk_profile: RiskProfile::Moderate,
        }
    }

    // ==================== Validation ====================

    #[test]
    fn test_rejects_non_positive_corpus() {
        let (service, _) = service_with(None);
        let mut goal = moderate_goal();
        goal.target_corpus = Decimal::ZERO;
        let err = service.plan_goal(goal).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_corpus_above_maximum() {
        let (service, _) = service_with(None);
        let mut goal = moderate_goal();
        goal.target_corpus = MAX_TARGET_CORPUS + Decimal::ONE;
        let err = service.plan_goal(goal).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));

        let mut goal = moderate_goal();
        goal.target_corpus = MAX_TARGET_CORPUS;
        let plan = service.plan_goal(goal).unwrap();
        assert!(plan.sip.monthly_sip > 0);
    }

    #[test]
    fn test_rejects_horizon_out_of_range() {
        let (service, _) = service_with(None);
        for horizon in [0, 31] {
            let mut goal = moderate_goal();
            goal.horizon = horizon;
            assert!(service.plan_goal(goal).is_err(), "horizon {}", horizon);
        }
    }

    #[test]
    fn test_deserializes_request_and_rejects_unknown_profile() {
        let goal: NewGoalPlan = serde_json::from_str(
            r#"{"targetCorpus": 2500000, "horizon": 5, "riskProfile": "Moderate"}"#,
        )
        .unwrap();
        assert_eq!(goal, moderate_goal());

        let bad = serde_json::from_str::<NewGoalPlan>(
            r#"{"targetCorpus": 2500000, "horizon": 5, "riskProfile": "Bold"}"#,
        );
        assert!(bad.is_err());
    }

    // ==================== Planning ====================

    #[test]
    fn test_plan_moderate_goal_without_rankings() {
        let (service, _) = service_with(None);
        let plan = service.plan_goal(moderate_goal()).unwrap();

        assert_eq!(plan.strategic.equity, dec!(0.55));
        assert_eq!(plan.allocation.alts, dec!(0.10));
        assert_eq!(plan.sip.expected_return_annual, dec!(0.097));
        assert_eq!(plan.sip.monthly_sip, 32_500);

        assert_eq!(plan.breakdown.equity.large_cap, dec!(0.275));
        assert_eq!(plan.breakdown.equity.mid_cap, dec!(0.165));
        assert_eq!(plan.breakdown.equity.small_cap, dec!(0.11));
        assert_eq!(plan.breakdown.alts.gold, dec!(0.05));
        assert_eq!(plan.breakdown.alts.silver, dec!(0.05));

        assert_eq!(plan.portfolio_table.len(), 6);
        assert_eq!(plan.summary.total_allocation, Decimal::ONE);
        assert_eq!(plan.summary.total_monthly_amount, Some(dec!(32500)));
        assert!(plan.notes["rankingsBasis"].starts_with("No rankings"));
        assert!(!plan.id.is_empty());
    }

    #[test]
    fn test_plan_uses_rankings_when_loaded() {
        let (service, _) = service_with(Some(RankingSnapshot::new(vec![
            AssetRanking::new("Large Cap", 1, Some(dec!(1))),
            AssetRanking::new("Mid Cap", 2, Some(dec!(1))),
            AssetRanking::new("Gold", 3, Some(dec!(3))),
            AssetRanking::new("Silver", 4, Some(dec!(1))),
        ])));
        let plan = service.plan_goal(moderate_goal()).unwrap();

        assert_eq!(plan.breakdown.equity.large_cap, dec!(0.275));
        assert_eq!(plan.breakdown.equity.mid_cap, dec!(0.275));
        assert_eq!(plan.breakdown.equity.small_cap, Decimal::ZERO);
        assert_eq!(plan.breakdown.alts.gold, dec!(0.075));
        assert_eq!(plan.breakdown.alts.silver, dec!(0.025));
        // Return estimate ignores the uneven metals split
        assert_eq!(plan.sip.expected_return_annual, dec!(0.097));
        assert_eq!(plan.portfolio_table.len(), 5);
        assert!(plan.notes["rankingsBasis"].starts_with("Ranking scores"));
    }

    #[test]
    fn test_plan_notes_insufficient_rankings() {
        let (service, _) = service_with(Some(RankingSnapshot::new(vec![AssetRanking::new(
            "Debt",
            1,
            Some(dec!(5)),
        )])));
        let plan = service.plan_goal(moderate_goal()).unwrap();
        assert!(plan.notes["rankingsBasis"].starts_with("Rankings loaded but insufficient"));
        assert_eq!(plan.portfolio_table.len(), 6);
    }

    #[test]
    fn test_plan_sees_reloaded_snapshot() {
        let (service, store) = service_with(None);
        let before = service.plan_goal(moderate_goal()).unwrap();
        assert_eq!(before.breakdown.alts.gold, dec!(0.05));

        store.replace(Some(RankingSnapshot::new(vec![
            AssetRanking::new("Gold", 1, Some(dec!(9))),
            AssetRanking::new("Silver", 2, Some(dec!(1))),
        ])));
        let after = service.plan_goal(moderate_goal()).unwrap();
        assert_eq!(after.breakdown.alts.gold, dec!(0.09));
    }

    #[test]
    fn test_custom_return_model_changes_sip() {
        struct ZeroReturn;
        impl ReturnModelTrait for ZeroReturn {
            fn expected_return(&self, _mix: &AssetMix) -> Decimal {
                Decimal::ZERO
            }
        }

        let (service, _) = service_with(None);
        let service = service.with_return_model(Arc::new(ZeroReturn));
        let plan = service.plan_goal(moderate_goal()).unwrap();
        assert_eq!(plan.sip.monthly_sip, 0);
        assert!(plan
            .portfolio_table
            .iter()
            .all(|r| r.monthly_amount == Some(Decimal::ZERO)));
    }

    #[test]
    fn test_strategic_allocation_preview() {
        let (service, _) = service_with(None);
        let allocation = service
            .strategic_allocation(20, RiskProfile::Conservative)
            .unwrap();
        assert_eq!(allocation.equity, dec!(0.60));
        assert_eq!(allocation.debt, dec!(0.30));

        assert!(matches!(
            service.strategic_allocation(31, RiskProfile::Conservative),
            Err(Error::Validation(_))
        ));
    }
}
