//! Series generator — dense yearly records from sparse anchors.
//!
//! Two-stage pipeline, deliberately not fused:
//!   1. One record per calendar year: bracket the year between anchors,
//!      blend (or pass anchor values through exactly), derive indices,
//!      stock-to-flow ratios, and the market-cap-weighted composite.
//!   2. Year-over-year dilution from each record's rounded predecessor.
//!
//! The generator is a pure function of the anchor table: same anchors,
//! bit-for-bit same output. All stored fields are rounded to a fixed
//! per-field precision so repeated runs compare equal.

use crate::{
    anchor::{validate_anchors, AssetSnapshot, HISTORICAL_ANCHORS},
    error::SeriesResult,
    interpolate::blend,
    types::{
        Year, BTC_BASE_ANNUAL_ISSUANCE, BTC_GENESIS_YEAR, BTC_HALVING_INTERVAL_YEARS,
        BTC_MAX_HALVINGS, BTC_MAX_SUPPLY, MCAP_EPSILON,
    },
};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One fully derived record per calendar year.
///
/// Field names are the stable wire contract consumed by the chart layer;
/// do not rename them. Market caps are in trillions USD, indices are
/// base 100 at 1913 (bitcoin: base 100 at its first nonzero-supply
/// anchor year), dilution fields are percent per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    pub year: Year,

    // Gold
    pub gold_stock_tonnes: f64,
    pub gold_annual_production: f64,
    pub gold_stock_to_flow: f64,
    pub gold_price_usd: f64,
    pub gold_mcap: f64,
    pub gold_supply_index: f64,
    pub gold_price_index: f64,

    // Equities
    pub equities_shares_billion: f64,
    pub equities_companies_listed: f64,
    pub equities_mcap: f64,
    pub sp500_price: f64,
    pub equities_supply_index: f64,
    pub equities_price_index: f64,

    // Real estate
    pub realestate_units_million: f64,
    pub realestate_median_usd: f64,
    pub realestate_mcap: f64,
    pub realestate_supply_index: f64,
    pub realestate_price_index: f64,

    // Bonds
    pub bonds_outstanding: f64,
    pub bonds_us10y_yield: f64,
    pub bonds_mcap: f64,
    pub bonds_supply_index: f64,

    // Bitcoin
    pub btc_supply: f64,
    pub btc_max_supply: f64,
    pub btc_pct_mined: f64,
    pub btc_price_usd: f64,
    pub btc_mcap: f64,
    pub btc_stock_to_flow: f64,
    pub btc_supply_index: f64,

    // Cross-asset aggregates
    pub numerator_index: f64,
    pub total_mcap: f64,
    pub dilution_yoy_gold: f64,
    pub dilution_yoy_equities: f64,
    pub dilution_yoy_realestate: f64,
    pub dilution_yoy_bonds: f64,
    pub dilution_yoy_btc: f64,
}

/// Round to `dp` decimal places, half away from zero.
fn round_dp(v: f64, dp: i32) -> f64 {
    let p = 10f64.powi(dp);
    (v * p).round() / p
}

/// Modeled bitcoin issuance for a calendar year, coins per year.
///
/// Halves every 4 years from genesis, capped at 6 halvings. Zero before
/// genesis.
pub fn btc_annual_issuance(year: Year) -> f64 {
    if year < BTC_GENESIS_YEAR {
        return 0.0;
    }
    let halvings = ((year - BTC_GENESIS_YEAR) / BTC_HALVING_INTERVAL_YEARS) as u32;
    BTC_BASE_ANNUAL_ISSUANCE / f64::from(2u32.pow(halvings.min(BTC_MAX_HALVINGS)))
}

/// Index base values, captured once from the anchor table.
struct IndexBases {
    gold_stock: f64,
    gold_price: f64,
    equities_shares: f64,
    sp500: f64,
    realestate_units: f64,
    realestate_median: f64,
    bonds_outstanding: f64,
    /// Supply at the first anchor with nonzero bitcoin supply.
    btc_supply: f64,
}

impl IndexBases {
    fn from_anchors(anchors: &[AssetSnapshot]) -> Self {
        let base = &anchors[0];
        let btc_supply = anchors
            .iter()
            .find(|a| a.btc_supply > 0.0)
            .map(|a| a.btc_supply)
            .unwrap_or(1.0);

        Self {
            gold_stock: base.gold_stock_tonnes,
            gold_price: base.gold_price,
            equities_shares: base.equities_shares_billion,
            sp500: base.sp500,
            realestate_units: base.realestate_units_million,
            realestate_median: base.realestate_median_usd,
            bonds_outstanding: base.bonds_outstanding,
            btc_supply,
        }
    }
}

/// Generate the gap-free yearly series from an anchor table.
///
/// Fails fast on a malformed table (fewer than two anchors, years not
/// strictly increasing). A well-formed table has no error paths: every
/// degenerate-arithmetic case (zero production, pre-genesis bitcoin,
/// zero denominators) resolves to a defined zero or a linear fallback,
/// never to NaN or infinity.
pub fn generate_series(anchors: &[AssetSnapshot]) -> SeriesResult<Vec<YearlyRecord>> {
    validate_anchors(anchors)?;

    let bases = IndexBases::from_anchors(anchors);
    let first_year = anchors[0].year;
    let last_year = anchors[anchors.len() - 1].year;

    log::debug!(
        "generating series {first_year}..={last_year} from {} anchors",
        anchors.len()
    );

    let mut records = Vec::with_capacity((last_year - first_year + 1) as usize);

    for year in first_year..=last_year {
        records.push(build_record(anchors, &bases, year));
    }

    derive_dilution(&mut records);

    Ok(records)
}

/// First pass: one record for `year`, all fields except the YoY
/// dilution columns (those need the completed pass).
fn build_record(anchors: &[AssetSnapshot], bases: &IndexBases, year: Year) -> YearlyRecord {
    // Bracketing pair: anchors are sorted and non-overlapping, so the
    // first interval containing the year is the only one.
    let mut idx = 0;
    for i in 0..anchors.len() - 1 {
        if year >= anchors[i].year && year <= anchors[i + 1].year {
            idx = i;
            break;
        }
    }
    let a = &anchors[idx];
    let b = &anchors[idx + 1];

    // Anchor years pass through exactly; interpolated curves must not
    // drift at the points they were fitted to.
    let mut snap = if year == a.year {
        a.clone()
    } else if year == b.year {
        b.clone()
    } else {
        blend(a, b, year)
    };

    // Bitcoin did not exist before genesis. Without this the interval
    // from the last zero-supply anchor into 2009 would ramp supply in
    // from nothing.
    if snap.year < BTC_GENESIS_YEAR {
        snap.btc_supply = 0.0;
        snap.btc_price = 0.0;
        snap.btc_mcap = 0.0;
    }

    // Indices, base 100 at the anchor table's first year.
    let gold_supply_index = snap.gold_stock_tonnes / bases.gold_stock * 100.0;
    let gold_price_index = snap.gold_price / bases.gold_price * 100.0;
    let equities_supply_index = snap.equities_shares_billion / bases.equities_shares * 100.0;
    let equities_price_index = snap.sp500 / bases.sp500 * 100.0;
    let realestate_supply_index = snap.realestate_units_million / bases.realestate_units * 100.0;
    let realestate_price_index = snap.realestate_median_usd / bases.realestate_median * 100.0;
    let bonds_supply_index = snap.bonds_outstanding / bases.bonds_outstanding * 100.0;

    // Bitcoin index, base 100 at the first nonzero-supply anchor.
    let btc_supply_index = if snap.btc_supply > 0.0 {
        snap.btc_supply / bases.btc_supply * 100.0
    } else {
        0.0
    };

    let gold_stock_to_flow = if snap.gold_production > 0.0 {
        snap.gold_stock_tonnes / snap.gold_production
    } else {
        0.0
    };

    let issuance = btc_annual_issuance(year);
    let btc_stock_to_flow = if snap.btc_supply > 0.0 && issuance > 0.0 {
        snap.btc_supply / issuance
    } else {
        0.0
    };

    // Composite: market-cap-weighted average of the supply indices.
    // Weights are recomputed every year. Bitcoin joins only once its
    // market cap clears the epsilon.
    let btc_mcap_weighted = if snap.btc_mcap > MCAP_EPSILON {
        snap.btc_mcap
    } else {
        0.0
    };
    let total_mcap = snap.gold_mcap
        + snap.equities_mcap
        + snap.realestate_mcap
        + snap.bonds_mcap
        + btc_mcap_weighted;

    let numerator_index = if total_mcap > 0.0 {
        (gold_supply_index * snap.gold_mcap
            + equities_supply_index * snap.equities_mcap
            + realestate_supply_index * snap.realestate_mcap
            + bonds_supply_index * snap.bonds_mcap
            + btc_supply_index * btc_mcap_weighted)
            / total_mcap
    } else {
        0.0
    };

    YearlyRecord {
        year,

        gold_stock_tonnes: round_dp(snap.gold_stock_tonnes, 0),
        gold_annual_production: round_dp(snap.gold_production, 0),
        gold_stock_to_flow: round_dp(gold_stock_to_flow, 1),
        gold_price_usd: round_dp(snap.gold_price, 0),
        gold_mcap: round_dp(snap.gold_mcap, 2),
        gold_supply_index: round_dp(gold_supply_index, 1),
        gold_price_index: round_dp(gold_price_index, 1),

        equities_shares_billion: round_dp(snap.equities_shares_billion, 0),
        equities_companies_listed: round_dp(snap.equities_companies, 0),
        equities_mcap: round_dp(snap.equities_mcap, 2),
        sp500_price: round_dp(snap.sp500, 0),
        equities_supply_index: round_dp(equities_supply_index, 1),
        equities_price_index: round_dp(equities_price_index, 1),

        realestate_units_million: round_dp(snap.realestate_units_million, 0),
        realestate_median_usd: round_dp(snap.realestate_median_usd, 0),
        realestate_mcap: round_dp(snap.realestate_mcap, 2),
        realestate_supply_index: round_dp(realestate_supply_index, 1),
        realestate_price_index: round_dp(realestate_price_index, 1),

        bonds_outstanding: round_dp(snap.bonds_outstanding, 2),
        bonds_us10y_yield: round_dp(snap.bonds_yield, 1),
        bonds_mcap: round_dp(snap.bonds_mcap, 2),
        bonds_supply_index: round_dp(bonds_supply_index, 1),

        btc_supply: round_dp(snap.btc_supply, 0),
        btc_max_supply: BTC_MAX_SUPPLY,
        btc_pct_mined: round_dp(snap.btc_supply / BTC_MAX_SUPPLY * 100.0, 1),
        btc_price_usd: round_dp(snap.btc_price, 0),
        btc_mcap: if snap.btc_mcap > MCAP_EPSILON {
            round_dp(snap.btc_mcap, 4)
        } else {
            0.0
        },
        btc_stock_to_flow: round_dp(btc_stock_to_flow, 1),
        btc_supply_index: round_dp(btc_supply_index, 1),

        numerator_index: round_dp(numerator_index, 1),
        total_mcap: round_dp(total_mcap, 2),

        // Second pass fills these in; the first record keeps zeros by
        // definition (no prior year).
        dilution_yoy_gold: 0.0,
        dilution_yoy_equities: 0.0,
        dilution_yoy_realestate: 0.0,
        dilution_yoy_bonds: 0.0,
        dilution_yoy_btc: 0.0,
    }
}

/// YoY percentage change from the stored (rounded) previous value.
/// Zero when the previous value is not strictly positive.
fn yoy(curr: f64, prev: f64) -> f64 {
    if prev > 0.0 {
        round_dp((curr / prev - 1.0) * 100.0, 2)
    } else {
        0.0
    }
}

/// Second pass: trailing year-over-year supply growth per class.
fn derive_dilution(records: &mut [YearlyRecord]) {
    for i in 1..records.len() {
        let prev_gold = records[i - 1].gold_stock_tonnes;
        let prev_shares = records[i - 1].equities_shares_billion;
        let prev_units = records[i - 1].realestate_units_million;
        let prev_bonds = records[i - 1].bonds_outstanding;
        let prev_btc = records[i - 1].btc_supply;

        let curr = &mut records[i];
        curr.dilution_yoy_gold = yoy(curr.gold_stock_tonnes, prev_gold);
        curr.dilution_yoy_equities = yoy(curr.equities_shares_billion, prev_shares);
        curr.dilution_yoy_realestate = yoy(curr.realestate_units_million, prev_units);
        curr.dilution_yoy_bonds = yoy(curr.bonds_outstanding, prev_bonds);
        curr.dilution_yoy_btc = yoy(curr.btc_supply, prev_btc);
    }
}

static FULL_SERIES: OnceLock<Vec<YearlyRecord>> = OnceLock::new();

/// The memoized series for the compiled-in anchor table.
///
/// Initialization is idempotent and side-effect-free; racing callers may
/// compute it redundantly, the first result wins and is never mutated.
pub fn full_series() -> &'static [YearlyRecord] {
    FULL_SERIES.get_or_init(|| {
        generate_series(&HISTORICAL_ANCHORS).expect("compiled-in anchor table is well-formed")
    })
}
