//! Rule-based strategic allocation.

use log::debug;
use rust_decimal_macros::dec;

use crate::errors::{AllocationError, Result};

use super::allocation_model::{HorizonBucket, RiskProfile, StrategicAllocation};

/// Fixed weight vector for every (horizon bucket, risk profile) pair.
///
/// Gold and silver hold 5% each everywhere; equity and debt trade off
/// against each other. Every row sums to exactly one.
pub fn grid_weights(bucket: HorizonBucket, risk_profile: RiskProfile) -> StrategicAllocation {
    let (equity, debt) = match (bucket, risk_profile) {
        (HorizonBucket::ShortTerm, RiskProfile::Conservative) => (dec!(0.15), dec!(0.75)),
        (HorizonBucket::ShortTerm, RiskProfile::Moderate) => (dec!(0.25), dec!(0.65)),
        (HorizonBucket::ShortTerm, RiskProfile::Aggressive) => (dec!(0.35), dec!(0.55)),
        (HorizonBucket::MediumTerm, RiskProfile::Conservative) => (dec!(0.40), dec!(0.50)),
        (HorizonBucket::MediumTerm, RiskProfile::Moderate) => (dec!(0.55), dec!(0.35)),
        (HorizonBucket::MediumTerm, RiskProfile::Aggressive) => (dec!(0.65), dec!(0.25)),
        (HorizonBucket::LongTerm, RiskProfile::Conservative) => (dec!(0.60), dec!(0.30)),
        (HorizonBucket::LongTerm, RiskProfile::Moderate) => (dec!(0.75), dec!(0.15)),
        (HorizonBucket::LongTerm, RiskProfile::Aggressive) => (dec!(0.85), dec!(0.05)),
    };

    StrategicAllocation {
        equity,
        debt,
        gold: dec!(0.05),
        silver: dec!(0.05),
    }
}

/// Strategic allocation for a goal `horizon_years` away.
///
/// A zero horizon is a caller bug and is rejected rather than bucketed.
pub fn allocate(horizon_years: u32, risk_profile: RiskProfile) -> Result<StrategicAllocation> {
    if horizon_years == 0 {
        return Err(AllocationError::InvalidArgument(
            "horizon_years must be a positive number of years".to_string(),
        )
        .into());
    }

    let bucket = HorizonBucket::from_years(horizon_years);
    let allocation = grid_weights(bucket, risk_profile);
    debug!(
        "Strategic allocation for {}y ({}) {}: {:?}",
        horizon_years,
        bucket.as_str(),
        risk_profile,
        allocation
    );
    Ok(allocation)
}
