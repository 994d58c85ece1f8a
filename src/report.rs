//! Plain-text report assembly for the dashboard binary
//!
//! Turns canonical samples and summaries into the text the binary prints,
//! plus the payload for `--json` mode. This is the only presentation layer
//! in the crate; everything upstream stays plain data.

use serde::Serialize;

use crate::conditions::condition_display_text;
use crate::data::{aqi_label, AirQualityReading, DailySummary, ForecastSample};

/// One hourly-strip cell prepared for display
#[derive(Debug, Clone, Serialize)]
pub struct HourlySlot {
    /// Hour label in the target zone, e.g. "15시"
    pub hour_label: String,
    /// Temperature truncated to a whole degree
    pub temperature: i32,
    /// Precipitation probability truncated to a whole percent
    pub precipitation_pct: i32,
    /// Canonical icon id for the slot
    pub icon_id: String,
}

/// Everything `--json` mode emits, borrowed from the pipeline results
#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub city: Option<&'a str>,
    pub hourly: Vec<HourlySlot>,
    pub days: &'a [DailySummary],
    pub air_quality: Option<&'a AirQualityReading>,
    pub advisory: &'a str,
}

impl<'a> ReportPayload<'a> {
    /// Assemble the JSON payload from the pipeline results.
    pub fn new(
        city: Option<&'a str>,
        samples: &[ForecastSample],
        days: &'a [DailySummary],
        air: Option<&'a AirQualityReading>,
        advisory: &'a str,
        strip_slots: usize,
    ) -> Self {
        Self {
            city,
            hourly: hourly_strip(samples, strip_slots),
            days,
            air_quality: air,
            advisory,
        }
    }
}

/// Reduce the leading samples to display cells for the hourly strip.
///
/// Numbers are truncated toward zero, not rounded, matching how the strip
/// has always displayed whole figures.
pub fn hourly_strip(samples: &[ForecastSample], slots: usize) -> Vec<HourlySlot> {
    samples
        .iter()
        .take(slots)
        .map(|sample| HourlySlot {
            hour_label: sample.local_time().format("%H시").to_string(),
            temperature: sample.temperature as i32,
            precipitation_pct: (sample.precipitation_probability * 100.0) as i32,
            icon_id: sample.icon_id.clone(),
        })
        .collect()
}

/// Lay out the full text report.
///
/// Sections with nothing to show are omitted entirely: no air reading means
/// no air section, an empty advisory means no advice section.
pub fn build_report(
    city: Option<&str>,
    samples: &[ForecastSample],
    days: &[DailySummary],
    air: Option<&AirQualityReading>,
    advisory: &str,
    strip_slots: usize,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    match city {
        Some(name) => lines.push(format!("{} 날씨", name)),
        None => lines.push("날씨 요약".to_string()),
    }

    if let Some(current) = samples.first() {
        lines.push(String::new());
        lines.push(format!(
            "현재  {} 기준",
            current.local_time().format("%m/%d %H:%M")
        ));
        lines.push(format!(
            "  {}  {:.1}°C (체감 {:.1}°C)",
            condition_display_text(&current.description),
            current.temperature,
            current.feels_like
        ));
        lines.push(format!(
            "  습도 {:.0}% · 강수확률 {:.0}%",
            current.humidity,
            current.precipitation_probability * 100.0
        ));

        lines.push(String::new());
        lines.push("시간별 예보".to_string());
        for slot in hourly_strip(samples, strip_slots) {
            lines.push(format!(
                "  {}  {:>3}°  💧 {:>3}%  {}",
                slot.hour_label, slot.temperature, slot.precipitation_pct, slot.icon_id
            ));
        }
    }

    if !days.is_empty() {
        lines.push(String::new());
        lines.push("일별 요약".to_string());
        for day in days {
            lines.push(format!(
                "  {}  {}  최고 {:.1}° 최저 {:.1}°  습도 {:.0}%  강수 {:.0}%",
                day.date.format("%m/%d"),
                day.dominant_condition_text,
                day.max_temperature,
                day.min_temperature,
                day.mean_humidity,
                day.mean_precipitation_probability
            ));
        }
    }

    if let Some(reading) = air {
        lines.push(String::new());
        lines.push("대기질".to_string());
        lines.push(format!(
            "  {} (PM2.5 {:.1} · PM10 {:.1})",
            aqi_label(reading.aqi_level),
            reading.pm2_5,
            reading.pm10
        ));
    }

    if !advisory.is_empty() {
        lines.push(String::new());
        lines.push("주간 조언".to_string());
        lines.push(advisory.to_string());
    }

    lines.join("\n")
}
