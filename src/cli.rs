//! Command-line interface parsing for the weather dashboard CLI
//!
//! This module handles parsing of CLI arguments using clap and validation
//! of the derived run configuration, such as the hourly strip length.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// The forecast endpoint serves at most 40 slots (5 days of 3-hour steps)
const MAX_STRIP_SLOTS: u8 = 40;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested strip length is outside the payload's slot range
    #[error("Invalid hour count: {0}. Expected a value between 1 and 40")]
    InvalidHours(u8),
}

/// Weatherdash - daily summaries and weekly advice from saved weather payloads
#[derive(Parser, Debug)]
#[command(name = "weatherdash")]
#[command(about = "Daily summaries and weekly advice from saved weather API payloads")]
#[command(version)]
pub struct Cli {
    /// Path to a saved 5-day/3-hour forecast response (JSON)
    pub forecast: PathBuf,

    /// Path to a saved air pollution response (JSON)
    ///
    /// When given, the report gains an air quality section and the advisory
    /// can recommend a mask on poor readings.
    #[arg(long, value_name = "FILE")]
    pub air: Option<PathBuf>,

    /// Number of leading 3-hour slots to show in the hourly strip (1-40)
    #[arg(long, value_name = "N", default_value_t = 8)]
    pub hours: u8,

    /// Emit the pipeline results as pretty JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

/// Validated configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the forecast payload
    pub forecast_path: PathBuf,
    /// Path to the air pollution payload, if any
    pub air_path: Option<PathBuf>,
    /// Hourly strip length in slots
    pub strip_slots: usize,
    /// Whether to emit JSON instead of the text report
    pub json: bool,
}

impl RunConfig {
    /// Creates a RunConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(RunConfig)` with validated settings
    /// * `Err(CliError)` if the hour count is out of range
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.hours == 0 || cli.hours > MAX_STRIP_SLOTS {
            return Err(CliError::InvalidHours(cli.hours));
        }

        Ok(RunConfig {
            forecast_path: cli.forecast.clone(),
            air_path: cli.air.clone(),
            strip_slots: cli.hours as usize,
            json: cli.json,
        })
    }
}
