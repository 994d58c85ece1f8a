//! Condition display text and icon canonicalization
//!
//! The forecast source describes a sky condition three ways: a numeric code,
//! a short English description, and an icon token. This module owns the fixed
//! lookup tables that turn the description into the dashboard's display locale
//! and collapse the icon token onto the canonical day-variant asset id.

/// Display strings for the source's English condition descriptions.
///
/// The table is deliberately incomplete; the source vocabulary grows over
/// time, and descriptions without an entry are shown verbatim instead of
/// being hidden behind an error.
const CONDITION_TEXTS: &[(&str, &str)] = &[
    ("clear sky", "맑음"),
    ("few clouds", "구름 조금"),
    ("scattered clouds", "구름 낀 하늘"),
    ("broken clouds", "흐림"),
    ("overcast clouds", "온통 흐림"),
    ("light rain", "가벼운 비"),
    ("moderate rain", "보통 비"),
    ("heavy intensity rain", "강한 비"),
    ("very heavy rain", "매우 강한 비"),
    ("shower rain", "소나기"),
    ("light intensity shower rain", "약한 소나기"),
    ("drizzle", "이슬비"),
    ("light intensity drizzle", "약한 이슬비"),
    ("thunderstorm", "뇌우"),
    ("thunderstorm with light rain", "약한 비를 동반한 뇌우"),
    ("thunderstorm with rain", "비를 동반한 뇌우"),
    ("thunderstorm with heavy rain", "강한 비를 동반한 뇌우"),
    ("snow", "눈"),
    ("light snow", "가벼운 눈"),
    ("heavy snow", "폭설"),
    ("sleet", "진눈깨비"),
    ("rain and snow", "비와 눈"),
    ("mist", "박무"),
    ("haze", "연무"),
    ("fog", "안개"),
    ("smoke", "연기"),
    ("dust", "먼지"),
    ("sand", "모래바람"),
    ("squalls", "돌풍"),
    ("tornado", "토네이도"),
];

/// Icon families collapsed onto the family whose art is actually shipped.
///
/// The "04" (broken clouds) family has no asset of its own and reuses the
/// "03" (scattered clouds) art. New collapses are added here, not in code.
const ICON_FAMILY_OVERRIDES: &[(&str, &str)] = &[("04", "03")];

/// Base URL of the source's icon art, one PNG per canonical icon id
const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Returns the display text for a source condition description.
///
/// Unmapped descriptions pass through unchanged so new source vocabulary
/// degrades to English instead of disappearing.
pub fn condition_display_text(description: &str) -> &str {
    CONDITION_TEXTS
        .iter()
        .find(|(source, _)| *source == description)
        .map(|(_, display)| *display)
        .unwrap_or(description)
}

/// Canonicalizes an icon token to its day variant.
///
/// Night tokens ("01n") become their day counterpart ("01d"), then any
/// family listed in [`ICON_FAMILY_OVERRIDES`] is collapsed. The function is
/// total and idempotent: canonical tokens come back unchanged, and tokens
/// outside the known vocabulary only get the applicable rewrites.
pub fn canonicalize_icon(icon: &str) -> String {
    let day = match icon.strip_suffix('n') {
        Some(stem) => format!("{}d", stem),
        None => icon.to_string(),
    };

    for (family, replacement) in ICON_FAMILY_OVERRIDES {
        if let Some(rest) = day.strip_prefix(family) {
            return format!("{}{}", replacement, rest);
        }
    }

    day
}

/// Returns the URL of the PNG asset for a canonical icon id.
#[allow(dead_code)]
pub fn icon_url(icon_id: &str) -> String {
    format!("{}/{}.png", ICON_BASE_URL, icon_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_description_is_localized() {
        assert_eq!(condition_display_text("clear sky"), "맑음");
        assert_eq!(condition_display_text("broken clouds"), "흐림");
        assert_eq!(condition_display_text("light rain"), "가벼운 비");
    }

    #[test]
    fn test_unknown_description_passes_through() {
        assert_eq!(condition_display_text("ash fall"), "ash fall");
        assert_eq!(condition_display_text(""), "");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // The source always sends lowercase; anything else is unknown vocabulary
        assert_eq!(condition_display_text("Clear Sky"), "Clear Sky");
    }

    #[test]
    fn test_night_icon_becomes_day() {
        assert_eq!(canonicalize_icon("01n"), "01d");
        assert_eq!(canonicalize_icon("10n"), "10d");
    }

    #[test]
    fn test_day_icon_unchanged() {
        assert_eq!(canonicalize_icon("10d"), "10d");
        assert_eq!(canonicalize_icon("01d"), "01d");
    }

    #[test]
    fn test_broken_clouds_family_collapses() {
        assert_eq!(canonicalize_icon("04d"), "03d");
        assert_eq!(canonicalize_icon("04n"), "03d");
    }

    #[test]
    fn test_canonicalization_is_idempotent() {
        let tokens = [
            "01d", "01n", "02d", "02n", "03d", "03n", "04d", "04n", "09d",
            "09n", "10d", "10n", "11d", "11n", "13d", "13n", "50d", "50n",
            "", "n", "04", "999",
        ];

        for token in tokens {
            let once = canonicalize_icon(token);
            let twice = canonicalize_icon(&once);
            assert_eq!(once, twice, "token {:?} did not stabilize", token);
        }
    }

    #[test]
    fn test_degenerate_tokens_do_not_panic() {
        assert_eq!(canonicalize_icon(""), "");
        assert_eq!(canonicalize_icon("n"), "d");
        assert_eq!(canonicalize_icon("04"), "03");
    }

    #[test]
    fn test_icon_url_points_at_png_asset() {
        assert_eq!(
            icon_url("01d"),
            "https://openweathermap.org/img/wn/01d.png"
        );
    }
}
