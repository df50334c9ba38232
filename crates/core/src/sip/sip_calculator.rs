//! Expected return estimate and the monthly SIP solver.

use log::{debug, warn};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::constants::{MONTHS_PER_YEAR, SIP_ROUNDING_STEP};

use super::sip_model::{AssetMix, ReturnAssumptions, ReturnModelTrait, SipResult};

/// Expected annual return of `mix` under the default assumptions.
pub fn estimate_portfolio_return(mix: &AssetMix) -> Decimal {
    ReturnAssumptions::default().expected_return(mix)
}

/// Level monthly contribution that grows to `target_corpus`.
///
/// Inverts the future value of an ordinary annuity:
/// `P = FV * r / ((1 + r)^n - 1)` with `r` the monthly rate and `n` the
/// number of monthly deposits, each made at period end. The result is
/// rounded to the nearest 100 (ties to even).
///
/// Non-growth inputs (rate <= 0, zero horizon) and a degenerate
/// denominator yield 0. A payment beyond `u64::MAX` saturates to it.
pub fn calculate_monthly_sip(
    target_corpus: Decimal,
    horizon_years: u32,
    annual_return: Decimal,
) -> u64 {
    let months = u64::from(horizon_years) * u64::from(MONTHS_PER_YEAR);
    let monthly_rate = annual_return / Decimal::from(MONTHS_PER_YEAR);
    if monthly_rate <= Decimal::ZERO || months == 0 {
        return 0;
    }

    let Some(growth) = (Decimal::ONE + monthly_rate).checked_powu(months) else {
        debug!(
            "Compound growth overflowed for rate {} over {} months",
            monthly_rate, months
        );
        return 0;
    };
    let denominator = growth - Decimal::ONE;
    if denominator <= Decimal::ZERO {
        debug!(
            "Annuity denominator {} is not positive; contribution set to 0",
            denominator
        );
        return 0;
    }

    let Some(payment) = target_corpus
        .checked_mul(monthly_rate)
        .and_then(|scaled| scaled.checked_div(denominator))
    else {
        warn!(
            "Payment for target {} at monthly rate {} is out of range",
            target_corpus, monthly_rate
        );
        return u64::MAX;
    };
    let rounded = (payment / SIP_ROUNDING_STEP)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .saturating_mul(SIP_ROUNDING_STEP);
    match rounded.to_u64() {
        Some(sip) => sip,
        None if rounded > Decimal::ZERO => {
            warn!("Monthly payment {} exceeds the u64 range", rounded);
            u64::MAX
        }
        None => 0,
    }
}

/// Estimates the return of `mix` with `model` and sizes the SIP for it.
pub fn solve_sip(
    model: &dyn ReturnModelTrait,
    mix: &AssetMix,
    target_corpus: Decimal,
    horizon_years: u32,
) -> SipResult {
    let expected_return_annual = model.expected_return(mix);
    SipResult {
        expected_return_annual,
        monthly_sip: calculate_monthly_sip(target_corpus, horizon_years, expected_return_annual),
    }
}
