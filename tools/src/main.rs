//! numerator-export: headless series export for El Numerador.
//!
//! Generates the yearly series once and emits JSON for the chart layer.
//!
//! Usage:
//!   numerator-export                      # full series to stdout
//!   numerator-export --window 25          # trailing 25 years
//!   numerator-export --metrics            # headline metrics document
//!   numerator-export --out data.json --pretty

use anyhow::{Context, Result};
use numerator_core::{generate_series, latest_metrics, HISTORICAL_ANCHORS};
use std::env;
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let window: Option<usize> = args
        .windows(2)
        .find(|w| w[0] == "--window")
        .map(|w| w[1].parse())
        .transpose()
        .context("--window expects a number of years")?;
    let metrics_only = args.iter().any(|a| a == "--metrics");
    let pretty = args.iter().any(|a| a == "--pretty");
    let out = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| w[1].clone());

    let series = generate_series(&HISTORICAL_ANCHORS).context("anchor table rejected")?;
    log::info!(
        "generated {} yearly records ({}..={})",
        series.len(),
        series[0].year,
        series[series.len() - 1].year
    );

    let json = if metrics_only {
        to_json(&latest_metrics(&series), pretty)?
    } else {
        let tail = match window {
            Some(n) if n < series.len() => &series[series.len() - n..],
            _ => &series[..],
        };
        to_json(&tail, pretty)?
    };

    match out {
        Some(path) => {
            fs::write(&path, &json).with_context(|| format!("writing {path}"))?;
            log::info!("wrote {} bytes to {path}", json.len());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
