//! Year-over-year dilution tests — the dependent second pass.

use numerator_core::full_series;

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[test]
fn first_record_has_all_zero_dilution() {
    let first = &full_series()[0];

    assert_eq!(first.dilution_yoy_gold, 0.0);
    assert_eq!(first.dilution_yoy_equities, 0.0);
    assert_eq!(first.dilution_yoy_realestate, 0.0);
    assert_eq!(first.dilution_yoy_bonds, 0.0);
    assert_eq!(first.dilution_yoy_btc, 0.0);
}

/// The stored YoY field must equal `round((curr/prev - 1) * 100, 2)`
/// computed from the stored (rounded) supply values, for every
/// consecutive pair with a positive previous value.
#[test]
fn dilution_matches_the_stored_supply_values() {
    let series = full_series();

    for pair in series.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        let expect = |c: f64, p: f64| {
            if p > 0.0 {
                round2((c / p - 1.0) * 100.0)
            } else {
                0.0
            }
        };

        assert_eq!(
            curr.dilution_yoy_gold,
            expect(curr.gold_stock_tonnes, prev.gold_stock_tonnes),
            "gold, year {}",
            curr.year
        );
        assert_eq!(
            curr.dilution_yoy_equities,
            expect(curr.equities_shares_billion, prev.equities_shares_billion),
            "equities, year {}",
            curr.year
        );
        assert_eq!(
            curr.dilution_yoy_realestate,
            expect(curr.realestate_units_million, prev.realestate_units_million),
            "real estate, year {}",
            curr.year
        );
        assert_eq!(
            curr.dilution_yoy_bonds,
            expect(curr.bonds_outstanding, prev.bonds_outstanding),
            "bonds, year {}",
            curr.year
        );
        assert_eq!(
            curr.dilution_yoy_btc,
            expect(curr.btc_supply, prev.btc_supply),
            "bitcoin, year {}",
            curr.year
        );
    }
}

#[test]
fn gold_dilution_in_the_first_interpolated_year() {
    let rec = full_series().iter().find(|r| r.year == 1914).unwrap();

    // 35,000t compounding toward 42,000t over 16 years: 35,401t stored,
    // (35401/35000 - 1) * 100 = 1.15% at 2 dp.
    assert_eq!(rec.gold_stock_tonnes, 35_401.0);
    assert_eq!(rec.dilution_yoy_gold, 1.15);
}

#[test]
fn contraction_years_show_negative_dilution() {
    // Bonds outstanding fell from 135T (2021) to 133T (2022).
    let rec = full_series().iter().find(|r| r.year == 2022).unwrap();
    assert_eq!(rec.dilution_yoy_bonds, -1.48);
}
