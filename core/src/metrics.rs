//! Headline summary metrics — endpoint CAGR over the generated series.
//!
//! A pure read of the first and last record. No state, no lifecycle.

use crate::series::YearlyRecord;
use serde::{Deserialize, Serialize};

/// Compound annual growth rate, percent, rounded to one decimal.
///
/// Defined as 0 whenever `initial <= 0`, `terminal <= 0`, or
/// `years <= 0.0` — a negative base under a fractional exponent has no
/// real answer, and a zero span has no rate.
pub fn cagr(initial: f64, terminal: f64, years: f64) -> f64 {
    if initial <= 0.0 || terminal <= 0.0 || years <= 0.0 {
        return 0.0;
    }
    let rate = ((terminal / initial).powf(1.0 / years) - 1.0) * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Latest absolute value plus CAGR since the start of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub value: f64,
    pub cagr_pct: f64,
}

/// The three headline figures shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatestMetrics {
    pub numerator_index: MetricValue,
    pub total_mcap: MetricValue,
    pub gold_stock_to_flow: MetricValue,
}

impl LatestMetrics {
    fn zeroed() -> Self {
        let zero = MetricValue {
            value: 0.0,
            cagr_pct: 0.0,
        };
        Self {
            numerator_index: zero,
            total_mcap: zero,
            gold_stock_to_flow: zero,
        }
    }
}

/// Read the series endpoints and compute the headline CAGRs.
///
/// The span is the number of calendar years between the first and last
/// record. An empty series yields all zeros.
pub fn latest_metrics(series: &[YearlyRecord]) -> LatestMetrics {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return LatestMetrics::zeroed(),
    };

    let years = f64::from(last.year - first.year);

    LatestMetrics {
        numerator_index: MetricValue {
            value: last.numerator_index,
            cagr_pct: cagr(first.numerator_index, last.numerator_index, years),
        },
        total_mcap: MetricValue {
            value: last.total_mcap,
            cagr_pct: cagr(first.total_mcap, last.total_mcap, years),
        },
        gold_stock_to_flow: MetricValue {
            value: last.gold_stock_to_flow,
            cagr_pct: cagr(first.gold_stock_to_flow, last.gold_stock_to_flow, years),
        },
    }
}
