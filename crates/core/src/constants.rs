use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Shortest accepted goal horizon, in years
pub const MIN_HORIZON_YEARS: u32 = 1;

/// Longest accepted goal horizon, in years
pub const MAX_HORIZON_YEARS: u32 = 30;

/// Horizons below this many years fall in the short-term bucket
pub const SHORT_TERM_LIMIT_YEARS: u32 = 3;

/// Horizons up to and including this many years fall in the medium-term bucket
pub const MEDIUM_TERM_LIMIT_YEARS: u32 = 7;

/// Assumed annual return of the equity bucket
pub const DEFAULT_RETURN_EQUITY: Decimal = dec!(0.12);

/// Assumed annual return of the debt bucket
pub const DEFAULT_RETURN_DEBT: Decimal = dec!(0.07);

/// Real-estate-like component of the alternatives return
pub const DEFAULT_RETURN_REAL_ESTATE: Decimal = dec!(0.08);

/// Precious-metals-like component of the alternatives return
pub const DEFAULT_RETURN_PRECIOUS_METALS: Decimal = dec!(0.05);

/// Equity fallback split (share of the equity bucket)
pub const FALLBACK_LARGE_CAP_SHARE: Decimal = dec!(0.50);
pub const FALLBACK_MID_CAP_SHARE: Decimal = dec!(0.30);
pub const FALLBACK_SMALL_CAP_SHARE: Decimal = dec!(0.20);

/// Alternatives fallback split (share of gold + silver)
pub const FALLBACK_GOLD_SHARE: Decimal = dec!(0.5);
pub const FALLBACK_SILVER_SHARE: Decimal = dec!(0.5);

/// Minimum number of ranked alternatives needed for a score-driven split
pub const MIN_RANKED_ALTERNATIVES: usize = 2;

/// Largest target corpus accepted for a goal
pub const MAX_TARGET_CORPUS: Decimal = dec!(1000000000000000);

/// Monthly contributions are rounded to a multiple of this amount
pub const SIP_ROUNDING_STEP: Decimal = dec!(100);

pub const MONTHS_PER_YEAR: u32 = 12;

/// Tolerance used when checking that fractions add up
pub const ALLOCATION_TOLERANCE: Decimal = dec!(0.000000001);
