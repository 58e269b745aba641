//! Two-case interpolation policy for blending anchor snapshots.
//!
//! RULE: a field compounds (exponential interpolation) only when both
//! bracketing values are strictly positive; otherwise it moves linearly.
//! The bond yield is the one per-field exception — it is a rate, not a
//! stock, and is always linear.

use crate::anchor::AssetSnapshot;
use crate::types::Year;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// Compound growth: `a * (b/a)^t`. Requires both endpoints > 0.
    Exponential,
    /// Straight line: `a + (b-a) * t`.
    Linear,
}

impl Interpolation {
    /// The selection predicate. Strictly positive at both endpoints
    /// means compound growth is meaningful; anything else (a zero-valued
    /// pre-genesis bitcoin field, a data gap) falls back to linear.
    pub fn select(a: f64, b: f64) -> Self {
        if a > 0.0 && b > 0.0 {
            Interpolation::Exponential
        } else {
            Interpolation::Linear
        }
    }

    /// Evaluate between `a` and `b` at parameter `t` in [0, 1].
    pub fn apply(self, a: f64, b: f64, t: f64) -> f64 {
        match self {
            Interpolation::Exponential => a * (b / a).powf(t),
            Interpolation::Linear => a + (b - a) * t,
        }
    }
}

/// Interpolate one scalar field under the selected policy.
fn field(a: f64, b: f64, t: f64) -> f64 {
    Interpolation::select(a, b).apply(a, b, t)
}

/// Blend two bracketing anchors at `year`.
///
/// Callers pass anchor values through unchanged at anchor years; this
/// function is only invoked for years strictly between `a` and `b`.
pub fn blend(a: &AssetSnapshot, b: &AssetSnapshot, year: Year) -> AssetSnapshot {
    let t = f64::from(year - a.year) / f64::from(b.year - a.year);

    AssetSnapshot {
        year,
        gold_stock_tonnes: field(a.gold_stock_tonnes, b.gold_stock_tonnes, t),
        gold_production: field(a.gold_production, b.gold_production, t),
        gold_price: field(a.gold_price, b.gold_price, t),
        gold_mcap: field(a.gold_mcap, b.gold_mcap, t),
        equities_shares_billion: field(a.equities_shares_billion, b.equities_shares_billion, t),
        equities_companies: field(a.equities_companies, b.equities_companies, t),
        equities_mcap: field(a.equities_mcap, b.equities_mcap, t),
        sp500: field(a.sp500, b.sp500, t),
        realestate_units_million: field(a.realestate_units_million, b.realestate_units_million, t),
        realestate_median_usd: field(a.realestate_median_usd, b.realestate_median_usd, t),
        realestate_mcap: field(a.realestate_mcap, b.realestate_mcap, t),
        bonds_outstanding: field(a.bonds_outstanding, b.bonds_outstanding, t),
        // Yields move linearly regardless of sign.
        bonds_yield: Interpolation::Linear.apply(a.bonds_yield, b.bonds_yield, t),
        bonds_mcap: field(a.bonds_mcap, b.bonds_mcap, t),
        btc_supply: field(a.btc_supply, b.btc_supply, t),
        btc_price: field(a.btc_price, b.btc_price, t),
        btc_mcap: field(a.btc_mcap, b.btc_mcap, t),
    }
}
