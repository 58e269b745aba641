//! Bitcoin-specific behavior: genesis gating, the calendar-year halving
//! approximation, and the 2009 index base.

use numerator_core::{btc_annual_issuance, full_series, types::BTC_GENESIS_YEAR};

#[test]
fn all_bitcoin_fields_are_zero_before_genesis() {
    for rec in full_series().iter().filter(|r| r.year < BTC_GENESIS_YEAR) {
        assert_eq!(rec.btc_supply, 0.0, "year {}", rec.year);
        assert_eq!(rec.btc_price_usd, 0.0, "year {}", rec.year);
        assert_eq!(rec.btc_mcap, 0.0, "year {}", rec.year);
        assert_eq!(rec.btc_stock_to_flow, 0.0, "year {}", rec.year);
        assert_eq!(rec.btc_supply_index, 0.0, "year {}", rec.year);
        assert_eq!(rec.btc_pct_mined, 0.0, "year {}", rec.year);
        assert_eq!(rec.dilution_yoy_btc, 0.0, "year {}", rec.year);
    }
}

#[test]
fn genesis_year_is_the_index_base() {
    let rec = full_series()
        .iter()
        .find(|r| r.year == 2009)
        .expect("2009 must exist");

    assert_eq!(rec.btc_supply, 1_623_400.0);
    assert_eq!(rec.btc_supply_index, 100.0, "index base 100 at genesis");
    // 1,623,400 coins over 328,500/yr modeled issuance.
    assert_eq!(rec.btc_stock_to_flow, 4.9);
    // The 2009 anchor has negligible market cap; excluded from weighting.
    assert_eq!(rec.btc_mcap, 0.0);
    // No prior year with nonzero supply.
    assert_eq!(rec.dilution_yoy_btc, 0.0);
}

#[test]
fn issuance_halves_every_four_years_capped_at_six() {
    assert_eq!(btc_annual_issuance(2008), 0.0, "nothing before genesis");
    assert_eq!(btc_annual_issuance(2009), 328_500.0);
    assert_eq!(btc_annual_issuance(2012), 328_500.0, "still in epoch 0");
    assert_eq!(btc_annual_issuance(2013), 164_250.0);
    assert_eq!(btc_annual_issuance(2017), 82_125.0);
    assert_eq!(btc_annual_issuance(2025), 20_531.25);
    // Capped: epoch 6 and beyond emit the same.
    assert_eq!(btc_annual_issuance(2033), 328_500.0 / 64.0);
    assert_eq!(btc_annual_issuance(2045), 328_500.0 / 64.0);
}

#[test]
fn stock_to_flow_rises_through_the_halvings() {
    let series = full_series();
    let by_year = |y: i32| series.iter().find(|r| r.year == y).unwrap();

    // Anchor years, so supply is exact: 16,774,575 / 82,125 and
    // 19,830,000 / 20,531.25.
    assert_eq!(by_year(2017).btc_stock_to_flow, 204.3);
    assert_eq!(by_year(2025).btc_stock_to_flow, 965.8);
    assert!(
        by_year(2025).btc_stock_to_flow > by_year(2017).btc_stock_to_flow,
        "scarcity must increase across halvings"
    );
}

#[test]
fn percent_mined_tracks_the_supply_cap() {
    let series = full_series();
    let last = series.last().unwrap();

    assert_eq!(last.btc_max_supply, 21_000_000.0);
    assert_eq!(last.btc_pct_mined, 94.4, "19.83M of 21M coins");

    for rec in series {
        assert!(
            rec.btc_pct_mined <= 100.0,
            "year {}: mined {}% exceeds cap",
            rec.year,
            rec.btc_pct_mined
        );
    }
}

#[test]
fn dilution_starts_the_year_after_genesis() {
    let series = full_series();
    let by_year = |y: i32| series.iter().find(|r| r.year == y).unwrap();

    assert_eq!(by_year(2009).dilution_yoy_btc, 0.0);
    assert!(
        by_year(2010).dilution_yoy_btc > 0.0,
        "2010 supply grew from a nonzero 2009 base"
    );
}
