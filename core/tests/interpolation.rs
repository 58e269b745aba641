//! Interpolation policy tests.
//!
//! The policy is the named two-case rule: exponential when both
//! endpoints are strictly positive, linear otherwise. The bond yield is
//! always linear.

use numerator_core::interpolate::Interpolation;
use numerator_core::{generate_series, HISTORICAL_ANCHORS};

#[test]
fn policy_compounds_only_between_positive_endpoints() {
    assert_eq!(Interpolation::select(1.0, 2.0), Interpolation::Exponential);
    assert_eq!(Interpolation::select(0.0, 2.0), Interpolation::Linear);
    assert_eq!(Interpolation::select(2.0, 0.0), Interpolation::Linear);
    assert_eq!(Interpolation::select(0.0, 0.0), Interpolation::Linear);
    assert_eq!(Interpolation::select(-1.0, 2.0), Interpolation::Linear);
}

#[test]
fn exponential_midpoint_matches_compound_growth() {
    let v = Interpolation::Exponential.apply(35_000.0, 42_000.0, 0.5);
    let expected = 35_000.0 * (42_000.0f64 / 35_000.0).sqrt();
    assert!(
        (v - expected).abs() < 1e-9,
        "exponential midpoint {v} != {expected}"
    );
    // The compound midpoint sits below the arithmetic one.
    assert!(v < 38_500.0, "midpoint {v} should be below linear 38500");
}

#[test]
fn linear_endpoints_and_midpoint() {
    assert_eq!(Interpolation::Linear.apply(0.0, 5.0, 0.0), 0.0);
    assert_eq!(Interpolation::Linear.apply(0.0, 5.0, 0.5), 2.5);
    assert_eq!(Interpolation::Linear.apply(0.0, 5.0, 1.0), 5.0);
}

/// Property 8 from the data table itself: 1913 gold stock 35,000t and
/// 1929 gold stock 42,000t put the 1921 midpoint at
/// 35000 * (42000/35000)^0.5 ≈ 38,341t, supply index ≈ 109.5.
#[test]
fn gold_stock_1921_is_the_compound_midpoint() {
    let series = generate_series(&HISTORICAL_ANCHORS[..2]).unwrap();

    let rec = series
        .iter()
        .find(|r| r.year == 1921)
        .expect("1921 must exist");

    assert_eq!(rec.gold_stock_tonnes, 38_341.0, "1921 gold stock");
    assert_eq!(rec.gold_supply_index, 109.5, "1921 gold supply index");
}

#[test]
fn bond_yield_moves_linearly_between_anchors() {
    let series = generate_series(&HISTORICAL_ANCHORS[..2]).unwrap();

    let rec = series.iter().find(|r| r.year == 1921).unwrap();

    // 4.0% in 1913 to 3.5% in 1929, midpoint 3.75 stored at 1 dp.
    assert_eq!(rec.bonds_us10y_yield, 3.8, "1921 10y yield");
}

#[test]
fn curves_pass_through_anchor_years_exactly() {
    let series = generate_series(&HISTORICAL_ANCHORS[..2]).unwrap();

    let first = series.first().unwrap();
    let last = series.last().unwrap();

    assert_eq!(first.year, 1913);
    assert_eq!(first.gold_stock_tonnes, 35_000.0);
    assert_eq!(last.year, 1929);
    assert_eq!(last.gold_stock_tonnes, 42_000.0);
    assert_eq!(last.sp500_price, 21.0, "21.45 stored as a whole number");
}
