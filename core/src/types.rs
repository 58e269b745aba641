//! Shared primitive types and emission-model constants.

/// A calendar year. The built-in series spans 1913..=2025.
pub type Year = i32;

/// Bitcoin protocol supply cap, coins.
pub const BTC_MAX_SUPPLY: f64 = 21_000_000.0;

/// First calendar year with circulating bitcoin supply.
pub const BTC_GENESIS_YEAR: Year = 2009;

/// Modeled annual issuance at genesis, coins per year.
///
/// The emission model is a calendar-year approximation: issuance halves
/// every [`BTC_HALVING_INTERVAL_YEARS`], capped at [`BTC_MAX_HALVINGS`].
/// The real schedule halves on block-height milestones; the approximation
/// is deliberate and kept.
pub const BTC_BASE_ANNUAL_ISSUANCE: f64 = 328_500.0;

pub const BTC_HALVING_INTERVAL_YEARS: Year = 4;

pub const BTC_MAX_HALVINGS: u32 = 6;

/// Below this market cap (trillions USD) bitcoin is excluded from the
/// composite weighting. A near-zero weight would only add noise.
pub const MCAP_EPSILON: f64 = 1e-7;
