//! Weatherdash - daily summaries and weekly advice from saved weather payloads
//!
//! A terminal tool that reads OpenWeatherMap-shaped JSON payloads from disk,
//! normalizes them into canonical samples, aggregates per calendar day, and
//! prints a text report or a JSON payload.

mod advice;
mod cli;
mod conditions;
mod data;
mod report;
mod summary;

use clap::Parser;

use advice::advise;
use cli::{Cli, RunConfig};
use data::{load_air_quality, load_forecast, normalize_all};
use report::{build_report, ReportPayload};
use summary::aggregate_by_day;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = RunConfig::from_cli(&cli)?;

    let forecast = load_forecast(&config.forecast_path)?;
    let samples = normalize_all(&forecast.list)?;

    let air = match &config.air_path {
        Some(path) => load_air_quality(path)?.reading(),
        None => None,
    };

    let days = aggregate_by_day(&samples)?;
    let advisory = advise(&days, air.as_ref());

    let city = forecast.city.as_ref().and_then(|c| c.name.as_deref());

    if config.json {
        let payload = ReportPayload::new(
            city,
            &samples,
            &days,
            air.as_ref(),
            &advisory,
            config.strip_slots,
        );
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "{}",
            build_report(
                city,
                &samples,
                &days,
                air.as_ref(),
                &advisory,
                config.strip_slots
            )
        );
    }

    Ok(())
}
