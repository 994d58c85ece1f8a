//! Daily aggregation of forecast samples
//!
//! Groups 3-hour samples by their target-zone calendar date and reduces each
//! day to min/max/mean figures plus the day's most frequent icon and display
//! condition. Aggregation is pure; the same samples always give the same
//! summaries.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use thiserror::Error;

use crate::conditions::condition_display_text;
use crate::data::{DailySummary, ForecastSample};

/// Errors that can occur when aggregating samples
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Aggregation was called with no samples
    #[error("no forecast samples to summarize")]
    EmptyInput,
}

/// Reduce a sequence of samples to one summary per calendar date.
///
/// Samples are grouped by their target-zone local date, never the raw UTC
/// date, so late-evening slots land on the day a local reader expects.
/// Summaries come back in ascending date order, and the mode-based fields
/// break frequency ties by first occurrence in input order.
pub fn aggregate_by_day(samples: &[ForecastSample]) -> Result<Vec<DailySummary>, SummaryError> {
    if samples.is_empty() {
        return Err(SummaryError::EmptyInput);
    }

    // BTreeMap keeps dates ascending; pushes keep input order within a day
    let mut days: BTreeMap<NaiveDate, Vec<&ForecastSample>> = BTreeMap::new();
    for sample in samples {
        days.entry(sample.local_date()).or_default().push(sample);
    }

    Ok(days
        .into_iter()
        .map(|(date, group)| summarize_day(date, &group))
        .collect())
}

/// Reduce one day's samples, already in input order, to a summary.
fn summarize_day(date: NaiveDate, group: &[&ForecastSample]) -> DailySummary {
    let count = group.len() as f64;

    let max_temperature = group
        .iter()
        .map(|s| s.temp_max)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_temperature = group
        .iter()
        .map(|s| s.temp_min)
        .fold(f64::INFINITY, f64::min);
    let mean_humidity = group.iter().map(|s| s.humidity).sum::<f64>() / count;
    let mean_precipitation_probability = group
        .iter()
        .map(|s| s.precipitation_probability * 100.0)
        .sum::<f64>()
        / count;

    let representative_icon_id =
        stable_mode(group.iter().map(|s| s.icon_id.as_str())).unwrap_or_default();
    let dominant_condition_text =
        stable_mode(group.iter().map(|s| condition_display_text(&s.description)))
            .unwrap_or_default();

    DailySummary {
        date,
        max_temperature,
        min_temperature,
        mean_humidity,
        mean_precipitation_probability,
        representative_icon_id,
        dominant_condition_text,
    }
}

/// Most frequent item, with ties broken by first occurrence.
///
/// The second scan walks first-seen order and replaces the best candidate
/// only on a strictly greater count, so equal counts keep the earlier item.
fn stable_mode<'a>(items: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for item in items {
        let count = counts.entry(item).or_insert(0);
        if *count == 0 {
            first_seen.push(item);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for item in first_seen {
        let count = counts[item];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((item, count));
        }
    }

    best.map(|(item, _)| item.to_string())
}
