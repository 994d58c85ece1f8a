//! Air pollution payload parsing and AQI display labels
//!
//! Mirrors the wire shape of the air pollution endpoint and exposes the
//! fixed label table for its 1-5 AQI scale. The advisory rules and the
//! report both read labels from here so the wording stays in one place.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::AirQualityReading;

/// Display labels for the source's ordinal AQI scale
const AQI_LABELS: &[(u8, &str)] = &[
    (1, "좋음"),
    (2, "보통"),
    (3, "나쁨"),
    (4, "매우 나쁨"),
    (5, "최악"),
];

/// Fallback label for AQI levels outside the documented scale
const AQI_LABEL_UNKNOWN: &str = "정보 없음";

/// Errors that can occur when loading a saved air pollution payload
#[derive(Debug, Error)]
pub enum AirQualityError {
    /// Reading the file failed
    #[error("failed to read air quality file: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid JSON of the expected shape
    #[error("failed to parse air quality payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level air pollution payload
#[derive(Debug, Deserialize)]
pub struct RawAirQualityResponse {
    /// Readings in time order; the dashboard uses the first (current) one
    #[serde(default)]
    pub list: Vec<RawAirQualityEntry>,
}

/// One reading of the air pollution payload
#[derive(Debug, Deserialize)]
pub struct RawAirQualityEntry {
    pub main: RawAqi,
    pub components: RawComponents,
}

/// AQI block of a reading
#[derive(Debug, Deserialize)]
pub struct RawAqi {
    pub aqi: u8,
}

/// Pollutant concentrations of a reading, µg/m³
#[derive(Debug, Deserialize)]
pub struct RawComponents {
    #[serde(default)]
    pub pm2_5: f64,
    #[serde(default)]
    pub pm10: f64,
}

impl RawAirQualityResponse {
    /// The current reading, or `None` when the payload carries no data.
    ///
    /// An empty list is not an error; the dashboard simply skips the
    /// air-quality sections.
    pub fn reading(&self) -> Option<AirQualityReading> {
        self.list.first().map(|entry| AirQualityReading {
            aqi_level: entry.main.aqi,
            pm2_5: entry.components.pm2_5,
            pm10: entry.components.pm10,
        })
    }
}

/// Display label for an AQI level.
///
/// Levels outside the documented 1-5 scale get the fallback label rather
/// than an error; the scale is source-defined and could grow.
pub fn aqi_label(level: u8) -> &'static str {
    AQI_LABELS
        .iter()
        .find(|(candidate, _)| *candidate == level)
        .map(|(_, label)| *label)
        .unwrap_or(AQI_LABEL_UNKNOWN)
}

/// Load a saved air pollution payload from disk.
///
/// # Arguments
/// * `path` - Path to a JSON file holding an air pollution endpoint response
///
/// # Returns
/// * `Ok(RawAirQualityResponse)` - The parsed payload
/// * `Err(AirQualityError)` - If reading or parsing fails
pub fn load_air_quality(path: &Path) -> Result<RawAirQualityResponse, AirQualityError> {
    let content = fs::read_to_string(path)?;
    let response: RawAirQualityResponse = serde_json::from_str(&content)?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Sample valid air pollution response
    const VALID_RESPONSE: &str = r#"{
        "coord": { "lon": 126.9778, "lat": 37.5683 },
        "list": [
            {
                "main": { "aqi": 3 },
                "components": {
                    "co": 432.25,
                    "no": 0.08,
                    "no2": 28.1,
                    "o3": 68.7,
                    "so2": 5.66,
                    "pm2_5": 35.8,
                    "pm10": 61.2,
                    "nh3": 2.41
                },
                "dt": 1721044800
            }
        ]
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let response: RawAirQualityResponse =
            serde_json::from_str(VALID_RESPONSE).expect("Failed to parse valid response");

        let reading = response.reading().expect("Reading missing");
        assert_eq!(reading.aqi_level, 3);
        assert!((reading.pm2_5 - 35.8).abs() < 0.01);
        assert!((reading.pm10 - 61.2).abs() < 0.01);
    }

    #[test]
    fn test_empty_list_gives_no_reading() {
        let response: RawAirQualityResponse =
            serde_json::from_str(r#"{ "list": [] }"#).expect("Failed to parse response");

        assert!(response.reading().is_none());
    }

    #[test]
    fn test_missing_list_gives_no_reading() {
        let response: RawAirQualityResponse =
            serde_json::from_str(r#"{ "coord": { "lon": 0.0, "lat": 0.0 } }"#)
                .expect("Failed to parse response");

        assert!(response.reading().is_none());
    }

    #[test]
    fn test_aqi_labels_cover_documented_scale() {
        assert_eq!(aqi_label(1), "좋음");
        assert_eq!(aqi_label(2), "보통");
        assert_eq!(aqi_label(3), "나쁨");
        assert_eq!(aqi_label(4), "매우 나쁨");
        assert_eq!(aqi_label(5), "최악");
    }

    #[test]
    fn test_unknown_aqi_level_gets_fallback_label() {
        assert_eq!(aqi_label(0), "정보 없음");
        assert_eq!(aqi_label(6), "정보 없음");
        assert_eq!(aqi_label(255), "정보 없음");
    }

    #[test]
    fn test_load_air_quality_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("air.json");

        let mut file = std::fs::File::create(&path).expect("Failed to create file");
        file.write_all(VALID_RESPONSE.as_bytes())
            .expect("Failed to write fixture");

        let response = load_air_quality(&path).expect("Failed to load air quality");
        assert!(response.reading().is_some());
    }

    #[test]
    fn test_load_air_quality_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("does-not-exist.json");

        let result = load_air_quality(&path);
        assert!(matches!(result, Err(AirQualityError::Io(_))));
    }

    #[test]
    fn test_load_air_quality_invalid_json() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("air.json");

        let mut file = std::fs::File::create(&path).expect("Failed to create file");
        file.write_all(b"[1, 2").expect("Failed to write fixture");

        let result = load_air_quality(&path);
        assert!(matches!(result, Err(AirQualityError::Parse(_))));
    }
}
