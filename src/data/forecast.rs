//! Forecast payload parsing and sample normalization
//!
//! This module mirrors the wire shape of the 5-day/3-hour forecast endpoint
//! and converts its entries into canonical [`ForecastSample`] values. The
//! raw structs keep validated fields optional so one malformed entry rejects
//! that single sample instead of failing the whole payload.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use super::ForecastSample;
use crate::conditions::canonicalize_icon;

/// Errors for a raw forecast entry that cannot become a sample
#[derive(Debug, Error)]
pub enum MalformedSampleError {
    /// A required field is absent from the entry
    #[error("forecast sample is missing required field: {0}")]
    MissingField(&'static str),

    /// The unix timestamp cannot be represented as an instant
    #[error("forecast sample has an out-of-range timestamp: {0}")]
    InvalidTimestamp(i64),
}

/// Errors that can occur when loading a saved forecast payload
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Reading the file failed
    #[error("failed to read forecast file: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid JSON of the expected shape
    #[error("failed to parse forecast payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level forecast payload
#[derive(Debug, Deserialize)]
pub struct RawForecastResponse {
    /// Forecast entries in ascending timestamp order, one per 3-hour slot
    #[serde(default)]
    pub list: Vec<RawForecastEntry>,
    /// Metadata about the forecast place
    #[serde(default)]
    pub city: Option<RawCity>,
}

/// Place metadata attached to the forecast payload
#[derive(Debug, Deserialize)]
pub struct RawCity {
    /// Place name as reported by the source
    #[serde(default)]
    pub name: Option<String>,
    /// Source-reported UTC offset in seconds. Day grouping uses the fixed
    /// target-zone offset instead, so this is informational only.
    #[serde(default)]
    #[allow(dead_code)]
    pub timezone: Option<i32>,
}

/// One 3-hour forecast entry as found on the wire
#[derive(Debug, Deserialize)]
pub struct RawForecastEntry {
    /// Unix timestamp of the slot, UTC seconds
    #[serde(default)]
    pub dt: Option<i64>,
    /// Numeric temperature/humidity block
    #[serde(default)]
    pub main: Option<RawMainMetrics>,
    /// Condition list; the dashboard reads the first entry
    #[serde(default)]
    pub weather: Vec<RawCondition>,
    /// Precipitation probability as a fraction (0.0-1.0)
    #[serde(default)]
    pub pop: Option<f64>,
}

/// Numeric block of a forecast entry
#[derive(Debug, Deserialize)]
pub struct RawMainMetrics {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

/// One condition descriptor of a forecast entry
#[derive(Debug, Deserialize)]
pub struct RawCondition {
    #[serde(default)]
    pub id: Option<u16>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Load a saved forecast payload from disk.
///
/// # Arguments
/// * `path` - Path to a JSON file holding a forecast endpoint response
///
/// # Returns
/// * `Ok(RawForecastResponse)` - The parsed payload, entries still raw
/// * `Err(ForecastError)` - If reading or parsing fails
pub fn load_forecast(path: &Path) -> Result<RawForecastResponse, ForecastError> {
    let content = fs::read_to_string(path)?;
    let response: RawForecastResponse = serde_json::from_str(&content)?;
    Ok(response)
}

/// Convert one raw forecast entry into a canonical [`ForecastSample`].
///
/// Pure: equal entries give equal samples. A missing required field rejects
/// this sample only, and the caller chooses whether to skip it or abort the
/// batch; nothing is zero-filled. The icon is canonicalized here so every
/// downstream consumer sees one token per condition family.
pub fn normalize(raw: &RawForecastEntry) -> Result<ForecastSample, MalformedSampleError> {
    let dt = require(raw.dt, "dt")?;
    let timestamp = DateTime::<Utc>::from_timestamp(dt, 0)
        .ok_or(MalformedSampleError::InvalidTimestamp(dt))?;

    let main = raw
        .main
        .as_ref()
        .ok_or(MalformedSampleError::MissingField("main"))?;
    let condition = raw
        .weather
        .first()
        .ok_or(MalformedSampleError::MissingField("weather"))?;

    Ok(ForecastSample {
        timestamp,
        temperature: require(main.temp, "main.temp")?,
        feels_like: require(main.feels_like, "main.feels_like")?,
        temp_min: require(main.temp_min, "main.temp_min")?,
        temp_max: require(main.temp_max, "main.temp_max")?,
        humidity: require(main.humidity, "main.humidity")?,
        precipitation_probability: require(raw.pop, "pop")?,
        condition_code: require(condition.id, "weather.id")?,
        icon_id: canonicalize_icon(require(condition.icon.as_deref(), "weather.icon")?),
        description: require(condition.description.as_deref(), "weather.description")?.to_string(),
    })
}

/// Convert every entry of a payload, aborting on the first malformed one.
///
/// Callers that prefer to drop bad entries can iterate [`normalize`]
/// themselves; the dashboard binary treats a bad payload as fatal.
pub fn normalize_all(
    entries: &[RawForecastEntry],
) -> Result<Vec<ForecastSample>, MalformedSampleError> {
    entries.iter().map(normalize).collect()
}

fn require<T>(field: Option<T>, name: &'static str) -> Result<T, MalformedSampleError> {
    field.ok_or(MalformedSampleError::MissingField(name))
}
