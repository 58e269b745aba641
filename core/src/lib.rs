//! # El Numerador — core series generator
//!
//! Turns a sparse table of hand-curated historical anchor snapshots
//! (1913–2025) into a dense year-by-year series for five asset classes:
//! gold, equities, real estate, bonds, and bitcoin. Each yearly record
//! carries raw quantities, supply/price indices (base 100), stock-to-flow
//! ratios, a market-cap-weighted composite index, and year-over-year
//! dilution rates.
//!
//! RULES:
//!   - Generation is a pure function of the anchor table. Same anchors,
//!     bit-for-bit same output, every invocation.
//!   - No I/O, no clock, no randomness anywhere in this crate.
//!   - Degenerate arithmetic never escapes: zero denominators and
//!     pre-genesis bitcoin resolve to defined zeros, never NaN.
//!
//! The presentation layer consumes the output as a read-only ordered
//! sequence: trailing-window slices for charts, the endpoints for the
//! headline metrics.

pub mod anchor;
pub mod error;
pub mod interpolate;
pub mod metrics;
pub mod series;
pub mod types;

pub use anchor::{validate_anchors, AssetSnapshot, HISTORICAL_ANCHORS};
pub use error::{SeriesError, SeriesResult};
pub use interpolate::Interpolation;
pub use metrics::{cagr, latest_metrics, LatestMetrics, MetricValue};
pub use series::{btc_annual_issuance, full_series, generate_series, YearlyRecord};
