//! Weekly advisory text generation
//!
//! Evaluates a fixed, ordered list of threshold rules over the aggregated
//! daily summaries and joins the matching sentences with blank lines. Rule
//! order is part of the user-visible contract: temperature band first, then
//! diurnal range, rain frequency, and air quality.

use crate::data::{aqi_label, AirQualityReading, DailySummary};

/// Mean daily-max temperature at or above which the hot sentence fires, °C
const HOT_THRESHOLD: f64 = 27.0;
/// Lower bound of the pleasant temperature band, °C
const PLEASANT_THRESHOLD: f64 = 16.0;
/// Lower bound of the cool band, °C; below it the cold sentence fires
const COOL_THRESHOLD: f64 = 5.0;
/// Mean diurnal range at or above which the swing warning fires, °C
const DIURNAL_RANGE_THRESHOLD: f64 = 10.0;
/// Daily mean precipitation probability that counts as a rainy day, percent
const RAINY_DAY_THRESHOLD: f64 = 50.0;
/// AQI level at or above which the mask recommendation fires
const AQI_ALERT_LEVEL: u8 = 3;

/// One advisory rule: contributes its sentence when the predicate holds
type AdviceRule = fn(&AdviceContext) -> Option<String>;

/// Rules in evaluation order. Reordering changes user-visible output.
const ADVICE_RULES: &[AdviceRule] = &[
    temperature_band_rule,
    diurnal_range_rule,
    rain_frequency_rule,
    air_quality_rule,
];

/// Aggregate figures the rules evaluate, computed once per call
struct AdviceContext<'a> {
    days: &'a [DailySummary],
    air: Option<&'a AirQualityReading>,
    mean_max_temperature: f64,
    mean_diurnal_range: f64,
    rainy_days: usize,
}

impl<'a> AdviceContext<'a> {
    fn new(days: &'a [DailySummary], air: Option<&'a AirQualityReading>) -> Self {
        let count = days.len() as f64;
        let mean_max_temperature = days.iter().map(|d| d.max_temperature).sum::<f64>() / count;
        let mean_diurnal_range = days.iter().map(|d| d.diurnal_range()).sum::<f64>() / count;
        let rainy_days = days
            .iter()
            .filter(|d| d.mean_precipitation_probability >= RAINY_DAY_THRESHOLD)
            .count();

        Self {
            days,
            air,
            mean_max_temperature,
            mean_diurnal_range,
            rainy_days,
        }
    }
}

/// Build the advisory text for the summarized period.
///
/// Every matching rule contributes one sentence, in rule order, separated by
/// blank lines. Never fails: with no summaries there is nothing to evaluate
/// and the result is empty, a missing air reading simply skips the air rule,
/// and unknown AQI levels get the fallback label.
pub fn advise(days: &[DailySummary], air: Option<&AirQualityReading>) -> String {
    if days.is_empty() {
        return String::new();
    }

    let ctx = AdviceContext::new(days, air);

    ADVICE_RULES
        .iter()
        .filter_map(|rule| rule(&ctx))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Mutually exclusive temperature bands over the mean daily maximum.
///
/// Exactly one band always fires; the bands partition the whole axis.
fn temperature_band_rule(ctx: &AdviceContext) -> Option<String> {
    let sentence = if ctx.mean_max_temperature >= HOT_THRESHOLD {
        "무더운 날씨가 이어져요. 가볍고 시원한 옷차림을 추천해요."
    } else if ctx.mean_max_temperature >= PLEASANT_THRESHOLD {
        "대체로 온화한 날씨예요. 야외 활동하기 좋아요."
    } else if ctx.mean_max_temperature >= COOL_THRESHOLD {
        "쌀쌀한 날씨예요. 가벼운 겉옷을 챙기세요."
    } else {
        "추운 날씨가 예상돼요. 따뜻하게 입으세요."
    };

    Some(sentence.to_string())
}

/// Warns about morning/evening swings when the mean daily spread is wide.
fn diurnal_range_rule(ctx: &AdviceContext) -> Option<String> {
    if ctx.mean_diurnal_range >= DIURNAL_RANGE_THRESHOLD {
        Some(format!(
            "일교차가 평균 {:.1}°C로 커요. 아침저녁 기온 변화에 대비하세요.",
            ctx.mean_diurnal_range
        ))
    } else {
        None
    }
}

/// Recommends an umbrella when at least half the days look rainy.
///
/// The comparison uses real division, so an exact half counts as rainy
/// enough: 2 rainy days out of 4 fires the rule.
fn rain_frequency_rule(ctx: &AdviceContext) -> Option<String> {
    if ctx.rainy_days as f64 >= ctx.days.len() as f64 / 2.0 {
        Some("비 오는 날이 많아요. 외출할 때 우산을 꼭 챙기세요.".to_string())
    } else {
        None
    }
}

/// Recommends a mask when the supplied air-quality level is poor.
fn air_quality_rule(ctx: &AdviceContext) -> Option<String> {
    let reading = ctx.air?;
    if reading.aqi_level >= AQI_ALERT_LEVEL {
        Some(format!(
            "대기질이 '{}' 수준이에요. 외출 시 마스크 착용을 권해요.",
            aqi_label(reading.aqi_level)
        ))
    } else {
        None
    }
}
