//! Data models and payload parsing for the weather dashboard
//!
//! Raw API payloads live in their own submodules and mirror the wire shape;
//! the canonical types in this module are what the rest of the crate works
//! with. Once a sample is normalized, nothing downstream touches raw JSON.

pub mod air_quality;
pub mod forecast;

#[allow(unused_imports)]
pub use air_quality::{aqi_label, load_air_quality, AirQualityError};
#[allow(unused_imports)]
pub use forecast::{load_forecast, normalize, normalize_all, ForecastError, MalformedSampleError};

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fixed UTC offset of the dashboard's target zone (KST, UTC+09:00), in seconds.
///
/// Calendar-day grouping and hour labels both use this single offset. Mixing
/// raw UTC dates with zone-converted dates moves late-evening samples across
/// the midnight boundary, so the conversion lives here and nowhere else.
pub const TARGET_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Returns the fixed target-zone offset used for all local-date math.
pub fn target_offset() -> FixedOffset {
    FixedOffset::east_opt(TARGET_UTC_OFFSET_SECS)
        .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap())
}

/// A single 3-hour forecast slot in canonical form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Instant this slot is valid for (UTC)
    pub timestamp: DateTime<Utc>,
    /// Air temperature in °C
    pub temperature: f64,
    /// Feels-like temperature in °C
    pub feels_like: f64,
    /// Slot minimum temperature in °C
    pub temp_min: f64,
    /// Slot maximum temperature in °C
    pub temp_max: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Precipitation probability as a fraction (0.0-1.0)
    pub precipitation_probability: f64,
    /// Source condition code (e.g. 500 for light rain)
    pub condition_code: u16,
    /// Canonical icon id, always a day variant (e.g. "10d")
    pub icon_id: String,
    /// Source condition description, untranslated (e.g. "light rain")
    pub description: String,
}

impl ForecastSample {
    /// The slot instant converted to the fixed target zone.
    pub fn local_time(&self) -> DateTime<FixedOffset> {
        self.timestamp.with_timezone(&target_offset())
    }

    /// The calendar date this slot belongs to in the target zone.
    ///
    /// This is the grouping key for daily aggregation. It can differ from
    /// the UTC date of `timestamp` for samples near midnight.
    pub fn local_date(&self) -> NaiveDate {
        self.local_time().date_naive()
    }
}

/// Per-calendar-day reduction of forecast samples
///
/// Recomputed from the samples on every aggregation; it carries no state
/// beyond its date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    /// Calendar date in the target zone
    pub date: NaiveDate,
    /// Maximum of the day's slot maximum temperatures, °C
    pub max_temperature: f64,
    /// Minimum of the day's slot minimum temperatures, °C
    pub min_temperature: f64,
    /// Mean relative humidity (0-100)
    pub mean_humidity: f64,
    /// Mean precipitation probability as a percentage (0-100)
    pub mean_precipitation_probability: f64,
    /// Most frequent canonical icon that day, first seen winning ties
    pub representative_icon_id: String,
    /// Most frequent display condition text that day, first seen winning ties
    pub dominant_condition_text: String,
}

impl DailySummary {
    /// Spread between the day's maximum and minimum temperature, °C.
    pub fn diurnal_range(&self) -> f64 {
        self.max_temperature - self.min_temperature
    }
}

/// Current air-quality reading from the pollution endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityReading {
    /// Air quality index on the source's ordinal scale, 1 (best) to 5 (worst)
    pub aqi_level: u8,
    /// Fine particulate matter (PM2.5) concentration, µg/m³
    pub pm2_5: f64,
    /// Coarse particulate matter (PM10) concentration, µg/m³
    pub pm10: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_at(timestamp: DateTime<Utc>) -> ForecastSample {
        ForecastSample {
            timestamp,
            temperature: 21.4,
            feels_like: 21.9,
            temp_min: 19.8,
            temp_max: 23.1,
            humidity: 60.0,
            precipitation_probability: 0.2,
            condition_code: 801,
            icon_id: "02d".to_string(),
            description: "few clouds".to_string(),
        }
    }

    #[test]
    fn test_local_date_uses_target_zone_not_utc() {
        // 16:00 UTC is 01:00 the next day in KST
        let ts = Utc.with_ymd_and_hms(2024, 7, 15, 16, 0, 0).unwrap();
        let sample = sample_at(ts);

        assert_eq!(sample.timestamp.date_naive().to_string(), "2024-07-15");
        assert_eq!(sample.local_date().to_string(), "2024-07-16");
    }

    #[test]
    fn test_local_date_boundary_is_15_utc() {
        // KST midnight falls at 15:00 UTC
        let before = sample_at(Utc.with_ymd_and_hms(2024, 7, 15, 14, 59, 59).unwrap());
        let after = sample_at(Utc.with_ymd_and_hms(2024, 7, 15, 15, 0, 0).unwrap());

        assert_eq!(before.local_date().to_string(), "2024-07-15");
        assert_eq!(after.local_date().to_string(), "2024-07-16");
    }

    #[test]
    fn test_local_time_keeps_the_instant() {
        let ts = Utc.with_ymd_and_hms(2024, 7, 15, 6, 0, 0).unwrap();
        let sample = sample_at(ts);

        let local = sample.local_time();
        assert_eq!(local.timestamp(), ts.timestamp());
        assert_eq!(local.format("%H:%M").to_string(), "15:00");
    }

    #[test]
    fn test_diurnal_range() {
        let summary = DailySummary {
            date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            max_temperature: 28.5,
            min_temperature: 17.2,
            mean_humidity: 55.0,
            mean_precipitation_probability: 20.0,
            representative_icon_id: "01d".to_string(),
            dominant_condition_text: "맑음".to_string(),
        };

        assert!((summary.diurnal_range() - 11.3).abs() < 1e-9);
    }

    #[test]
    fn test_daily_summary_serializes_to_json() {
        let summary = DailySummary {
            date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            max_temperature: 28.5,
            min_temperature: 17.2,
            mean_humidity: 55.0,
            mean_precipitation_probability: 20.0,
            representative_icon_id: "01d".to_string(),
            dominant_condition_text: "맑음".to_string(),
        };

        let json = serde_json::to_string(&summary).expect("Failed to serialize DailySummary");
        assert!(json.contains("\"date\":\"2024-07-15\""));
        assert!(json.contains("\"representative_icon_id\":\"01d\""));
    }

    #[test]
    fn test_air_quality_reading_roundtrip() {
        let reading = AirQualityReading {
            aqi_level: 3,
            pm2_5: 35.8,
            pm10: 61.2,
        };

        let json = serde_json::to_string(&reading).expect("Failed to serialize reading");
        let back: AirQualityReading =
            serde_json::from_str(&json).expect("Failed to deserialize reading");

        assert_eq!(back.aqi_level, 3);
        assert!((back.pm2_5 - 35.8).abs() < 0.01);
        assert!((back.pm10 - 61.2).abs() < 0.01);
    }
}
