//! Anchor snapshots — the hand-curated historical data table.
//!
//! One snapshot per designated year, raw quantities only. Derived fields
//! (indices, ratios, composites) are computed by the series generator.
//! Interpolation never crosses more than one anchor interval.
//!
//! Estimates draw on World Gold Council stock figures, WFE listings,
//! UN-Habitat housing counts, BIS/SIFMA debt outstanding, and on-chain
//! bitcoin supply.

use crate::{
    error::{SeriesError, SeriesResult},
    types::Year,
};
use serde::{Deserialize, Serialize};

/// Raw asset-class quantities for one historical year.
///
/// Market caps are in trillions USD. Bitcoin fields are zero for every
/// anchor before genesis (2009).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub year: Year,
    // Gold
    pub gold_stock_tonnes: f64,
    pub gold_production: f64,
    pub gold_price: f64,
    pub gold_mcap: f64,
    // Equities
    pub equities_shares_billion: f64,
    pub equities_companies: f64,
    pub equities_mcap: f64,
    pub sp500: f64,
    // Real estate
    pub realestate_units_million: f64,
    pub realestate_median_usd: f64,
    pub realestate_mcap: f64,
    // Bonds
    pub bonds_outstanding: f64,
    pub bonds_yield: f64,
    pub bonds_mcap: f64,
    // Bitcoin
    pub btc_supply: f64,
    pub btc_price: f64,
    pub btc_mcap: f64,
}

/// The compiled-in anchor table, strictly ascending by year.
pub const HISTORICAL_ANCHORS: [AssetSnapshot; 18] = [
    // 1913: pre-war baseline
    AssetSnapshot {
        year: 1913,
        gold_stock_tonnes: 35_000.0, gold_production: 690.0, gold_price: 20.67, gold_mcap: 0.04,
        equities_shares_billion: 5.0, equities_companies: 2_000.0, equities_mcap: 0.001, sp500: 8.04,
        realestate_units_million: 250.0, realestate_median_usd: 3_200.0, realestate_mcap: 0.9,
        bonds_outstanding: 0.03, bonds_yield: 4.0, bonds_mcap: 0.03,
        btc_supply: 0.0, btc_price: 0.0, btc_mcap: 0.0,
    },
    // 1929: late-twenties equity peak
    AssetSnapshot {
        year: 1929,
        gold_stock_tonnes: 42_000.0, gold_production: 600.0, gold_price: 20.63, gold_mcap: 0.04,
        equities_shares_billion: 12.0, equities_companies: 4_000.0, equities_mcap: 0.09, sp500: 21.45,
        realestate_units_million: 330.0, realestate_median_usd: 5_500.0, realestate_mcap: 2.5,
        bonds_outstanding: 0.12, bonds_yield: 3.5, bonds_mcap: 0.12,
        btc_supply: 0.0, btc_price: 0.0, btc_mcap: 0.0,
    },
    // 1945: Bretton Woods
    AssetSnapshot {
        year: 1945,
        gold_stock_tonnes: 50_000.0, gold_production: 800.0, gold_price: 34.71, gold_mcap: 0.08,
        equities_shares_billion: 15.0, equities_companies: 5_000.0, equities_mcap: 0.06, sp500: 17.36,
        realestate_units_million: 420.0, realestate_median_usd: 5_500.0, realestate_mcap: 2.5,
        bonds_outstanding: 0.30, bonds_yield: 2.4, bonds_mcap: 0.30,
        btc_supply: 0.0, btc_price: 0.0, btc_mcap: 0.0,
    },
    // 1960: post-war expansion
    AssetSnapshot {
        year: 1960,
        gold_stock_tonnes: 60_000.0, gold_production: 1_050.0, gold_price: 35.27, gold_mcap: 0.09,
        equities_shares_billion: 25.0, equities_companies: 8_000.0, equities_mcap: 0.30, sp500: 58.11,
        realestate_units_million: 550.0, realestate_median_usd: 11_900.0, realestate_mcap: 6.0,
        bonds_outstanding: 0.60, bonds_yield: 4.1, bonds_mcap: 0.60,
        btc_supply: 0.0, btc_price: 0.0, btc_mcap: 0.0,
    },
    // 1971: gold convertibility suspended
    AssetSnapshot {
        year: 1971,
        gold_stock_tonnes: 70_000.0, gold_production: 1_250.0, gold_price: 41.25, gold_mcap: 0.12,
        equities_shares_billion: 35.0, equities_companies: 10_000.0, equities_mcap: 0.70, sp500: 102.09,
        realestate_units_million: 650.0, realestate_median_usd: 24_800.0, realestate_mcap: 10.0,
        bonds_outstanding: 1.20, bonds_yield: 6.2, bonds_mcap: 1.20,
        btc_supply: 0.0, btc_price: 0.0, btc_mcap: 0.0,
    },
    // 1980: rate-hike era, gold spike
    AssetSnapshot {
        year: 1980,
        gold_stock_tonnes: 85_000.0, gold_production: 1_220.0, gold_price: 615.0, gold_mcap: 2.08,
        equities_shares_billion: 50.0, equities_companies: 14_000.0, equities_mcap: 2.50, sp500: 135.76,
        realestate_units_million: 780.0, realestate_median_usd: 63_700.0, realestate_mcap: 20.0,
        bonds_outstanding: 3.50, bonds_yield: 12.5, bonds_mcap: 3.50,
        btc_supply: 0.0, btc_price: 0.0, btc_mcap: 0.0,
    },
    // 1990: Japan asset bubble
    AssetSnapshot {
        year: 1990,
        gold_stock_tonnes: 105_000.0, gold_production: 2_180.0, gold_price: 383.0, gold_mcap: 1.54,
        equities_shares_billion: 80.0, equities_companies: 20_000.0, equities_mcap: 9.40, sp500: 330.22,
        realestate_units_million: 950.0, realestate_median_usd: 122_900.0, realestate_mcap: 40.0,
        bonds_outstanding: 11.00, bonds_yield: 8.1, bonds_mcap: 11.00,
        btc_supply: 0.0, btc_price: 0.0, btc_mcap: 0.0,
    },
    // 2000: dot-com peak
    AssetSnapshot {
        year: 2000,
        gold_stock_tonnes: 130_000.0, gold_production: 2_590.0, gold_price: 273.0, gold_mcap: 1.27,
        equities_shares_billion: 150.0, equities_companies: 35_000.0, equities_mcap: 31.00, sp500: 1_320.28,
        realestate_units_million: 1_150.0, realestate_median_usd: 165_300.0, realestate_mcap: 75.0,
        bonds_outstanding: 30.00, bonds_yield: 5.1, bonds_mcap: 30.00,
        btc_supply: 0.0, btc_price: 0.0, btc_mcap: 0.0,
    },
    // 2009: financial crisis; bitcoin genesis
    AssetSnapshot {
        year: 2009,
        gold_stock_tonnes: 165_000.0, gold_production: 2_600.0, gold_price: 1_096.0, gold_mcap: 5.77,
        equities_shares_billion: 200.0, equities_companies: 42_000.0, equities_mcap: 35.00, sp500: 1_115.10,
        realestate_units_million: 1_350.0, realestate_median_usd: 172_500.0, realestate_mcap: 115.0,
        bonds_outstanding: 75.00, bonds_yield: 3.3, bonds_mcap: 75.00,
        btc_supply: 1_623_400.0, btc_price: 0.001, btc_mcap: 0.0,
    },
    // 2012: QE3
    AssetSnapshot {
        year: 2012,
        gold_stock_tonnes: 175_000.0, gold_production: 2_860.0, gold_price: 1_675.0, gold_mcap: 9.42,
        equities_shares_billion: 220.0, equities_companies: 43_500.0, equities_mcap: 55.00, sp500: 1_426.19,
        realestate_units_million: 1_450.0, realestate_median_usd: 177_200.0, realestate_mcap: 175.0,
        bonds_outstanding: 97.00, bonds_yield: 1.8, bonds_mcap: 97.00,
        btc_supply: 10_625_050.0, btc_price: 13.5, btc_mcap: 0.0001,
    },
    // 2015: ECB QE
    AssetSnapshot {
        year: 2015,
        gold_stock_tonnes: 185_000.0, gold_production: 3_100.0, gold_price: 1_060.0, gold_mcap: 6.23,
        equities_shares_billion: 240.0, equities_companies: 44_000.0, equities_mcap: 65.00, sp500: 2_043.94,
        realestate_units_million: 1_530.0, realestate_median_usd: 222_400.0, realestate_mcap: 210.0,
        bonds_outstanding: 100.00, bonds_yield: 2.3, bonds_mcap: 100.00,
        btc_supply: 15_027_800.0, btc_price: 430.0, btc_mcap: 0.007,
    },
    // 2017: synchronized global growth
    AssetSnapshot {
        year: 2017,
        gold_stock_tonnes: 190_000.0, gold_production: 3_300.0, gold_price: 1_296.0, gold_mcap: 7.64,
        equities_shares_billion: 260.0, equities_companies: 45_000.0, equities_mcap: 85.00, sp500: 2_673.61,
        realestate_units_million: 1_600.0, realestate_median_usd: 248_800.0, realestate_mcap: 280.0,
        bonds_outstanding: 110.00, bonds_yield: 2.4, bonds_mcap: 110.00,
        btc_supply: 16_774_575.0, btc_price: 14_000.0, btc_mcap: 0.24,
    },
    // 2020: pandemic stimulus
    AssetSnapshot {
        year: 2020,
        gold_stock_tonnes: 200_000.0, gold_production: 3_200.0, gold_price: 1_898.0, gold_mcap: 11.26,
        equities_shares_billion: 290.0, equities_companies: 43_000.0, equities_mcap: 93.00, sp500: 3_756.07,
        realestate_units_million: 1_700.0, realestate_median_usd: 329_000.0, realestate_mcap: 310.0,
        bonds_outstanding: 128.00, bonds_yield: 0.9, bonds_mcap: 128.00,
        btc_supply: 18_587_000.0, btc_price: 29_000.0, btc_mcap: 0.54,
    },
    // 2021: peak stimulus
    AssetSnapshot {
        year: 2021,
        gold_stock_tonnes: 203_000.0, gold_production: 3_560.0, gold_price: 1_829.0, gold_mcap: 11.62,
        equities_shares_billion: 300.0, equities_companies: 43_500.0, equities_mcap: 121.00, sp500: 4_766.18,
        realestate_units_million: 1_740.0, realestate_median_usd: 374_900.0, realestate_mcap: 390.0,
        bonds_outstanding: 135.00, bonds_yield: 1.5, bonds_mcap: 135.00,
        btc_supply: 18_897_000.0, btc_price: 47_000.0, btc_mcap: 0.88,
    },
    // 2022: tightening cycle
    AssetSnapshot {
        year: 2022,
        gold_stock_tonnes: 205_500.0, gold_production: 3_612.0, gold_price: 1_824.0, gold_mcap: 11.80,
        equities_shares_billion: 305.0, equities_companies: 42_000.0, equities_mcap: 101.00, sp500: 3_839.50,
        realestate_units_million: 1_780.0, realestate_median_usd: 386_300.0, realestate_mcap: 380.0,
        bonds_outstanding: 133.00, bonds_yield: 3.9, bonds_mcap: 133.00,
        btc_supply: 19_240_000.0, btc_price: 16_500.0, btc_mcap: 0.32,
    },
    // 2023: quantitative tightening continues
    AssetSnapshot {
        year: 2023,
        gold_stock_tonnes: 208_500.0, gold_production: 3_644.0, gold_price: 2_063.0, gold_mcap: 12.93,
        equities_shares_billion: 310.0, equities_companies: 42_500.0, equities_mcap: 112.00, sp500: 4_769.83,
        realestate_units_million: 1_820.0, realestate_median_usd: 392_100.0, realestate_mcap: 385.0,
        bonds_outstanding: 141.00, bonds_yield: 3.9, bonds_mcap: 141.00,
        btc_supply: 19_570_000.0, btc_price: 42_000.0, btc_mcap: 0.83,
    },
    // 2024: spot ETF approvals, gradual easing
    AssetSnapshot {
        year: 2024,
        gold_stock_tonnes: 212_000.0, gold_production: 3_700.0, gold_price: 2_625.0, gold_mcap: 16.12,
        equities_shares_billion: 318.0, equities_companies: 43_000.0, equities_mcap: 128.00, sp500: 5_881.63,
        realestate_units_million: 1_860.0, realestate_median_usd: 412_300.0, realestate_mcap: 393.0,
        bonds_outstanding: 145.00, bonds_yield: 4.2, bonds_mcap: 145.00,
        btc_supply: 19_790_000.0, btc_price: 93_000.0, btc_mcap: 1.85,
    },
    // 2025: re-expansion
    AssetSnapshot {
        year: 2025,
        gold_stock_tonnes: 215_000.0, gold_production: 3_500.0, gold_price: 2_850.0, gold_mcap: 18.90,
        equities_shares_billion: 325.0, equities_companies: 43_500.0, equities_mcap: 148.00, sp500: 6_040.0,
        realestate_units_million: 1_900.0, realestate_median_usd: 425_000.0, realestate_mcap: 405.0,
        bonds_outstanding: 150.00, bonds_yield: 4.5, bonds_mcap: 150.00,
        btc_supply: 19_830_000.0, btc_price: 97_000.0, btc_mcap: 1.75,
    },
];

/// Check the generator preconditions: at least two anchors, years
/// strictly increasing. A table that fails here is a programming error
/// in whoever assembled it; there is no recovery path.
pub fn validate_anchors(anchors: &[AssetSnapshot]) -> SeriesResult<()> {
    if anchors.len() < 2 {
        return Err(SeriesError::TooFewAnchors {
            count: anchors.len(),
        });
    }

    for pair in anchors.windows(2) {
        if pair[1].year <= pair[0].year {
            return Err(SeriesError::UnsortedAnchors {
                prev: pair[0].year,
                next: pair[1].year,
            });
        }
    }

    Ok(())
}
