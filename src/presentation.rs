//! Formatting rules for displaying a [`crate::WeatherReport`].
//!
//! Nothing here builds markup; these are the values a renderer puts on screen.

use crate::types::daily_summary::DailySummary;
use crate::utils::round_half_up;
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

pub const DEFAULT_ICON_URL: &str = "https://openweathermap.org/img/wn";

/// Exposure band of a UV index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvLevel {
    pub fn from_index(index: u8) -> Self {
        match index {
            0..=2 => UvLevel::Low,
            3..=5 => UvLevel::Moderate,
            6..=7 => UvLevel::High,
            8..=10 => UvLevel::VeryHigh,
            _ => UvLevel::Extreme,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UvLevel::Low => "Low",
            UvLevel::Moderate => "Moderate",
            UvLevel::High => "High",
            UvLevel::VeryHigh => "Very High",
            UvLevel::Extreme => "Extreme",
        }
    }
}

/// URL of the 2x icon image for an icon token, e.g. `"10d"`.
///
/// ```rust
/// use forecast_digest::presentation::{icon_url, DEFAULT_ICON_URL};
///
/// assert_eq!(
///     icon_url(DEFAULT_ICON_URL, "10d"),
///     "https://openweathermap.org/img/wn/10d@2x.png"
/// );
/// ```
pub fn icon_url(base_url: &str, icon: &str) -> String {
    format!("{}/{}@2x.png", base_url.trim_end_matches('/'), icon)
}

/// Converts metres per second to whole kilometres per hour.
pub fn wind_speed_kmh(metres_per_second: f64) -> i64 {
    round_half_up(metres_per_second * 3.6)
}

/// Name of a forecast row: `"Today"` for the first row, the English weekday otherwise.
pub fn day_label<Tz: TimeZone>(index: usize, at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if index == 0 {
        return "Today".to_string();
    }
    at.with_timezone(tz).format("%A").to_string()
}

/// 24-hour `HH:MM` time of a forecast step.
pub fn hour_label<Tz: TimeZone>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%H:%M").to_string()
}

/// Whole degrees, e.g. `"18°"`.
pub fn temperature_label(celsius: f64) -> String {
    format!("{}°", round_half_up(celsius))
}

/// High and low of a day, e.g. `"18°/9°"`.
pub fn temperature_range_label(summary: &DailySummary) -> String {
    format!(
        "{}/{}",
        temperature_label(summary.max_temperature),
        temperature_label(summary.min_temperature)
    )
}

/// UV index with its band, e.g. `"7 (High)"`.
pub fn uv_label(index: u8) -> String {
    format!("{} ({})", index, UvLevel::from_index(index).label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::daily::bucket_by_day;
    use crate::test_support::{five_day_forecast, utc};
    use chrono::FixedOffset;

    #[test]
    fn test_uv_levels() {
        assert_eq!(UvLevel::from_index(0), UvLevel::Low);
        assert_eq!(UvLevel::from_index(2), UvLevel::Low);
        assert_eq!(UvLevel::from_index(3), UvLevel::Moderate);
        assert_eq!(UvLevel::from_index(5), UvLevel::Moderate);
        assert_eq!(UvLevel::from_index(7), UvLevel::High);
        assert_eq!(UvLevel::from_index(10), UvLevel::VeryHigh);
        assert_eq!(UvLevel::from_index(11), UvLevel::Extreme);
        assert_eq!(uv_label(8), "8 (Very High)");
    }

    #[test]
    fn test_icon_url_trims_trailing_slash() {
        assert_eq!(
            icon_url("http://icons.local/wn/", "01n"),
            "http://icons.local/wn/01n@2x.png"
        );
    }

    #[test]
    fn test_wind_speed_kmh() {
        assert_eq!(wind_speed_kmh(5.14), 19);
        assert_eq!(wind_speed_kmh(0.0), 0);
        // 1.25 m/s is exactly 4.5 km/h
        assert_eq!(wind_speed_kmh(1.25), 5);
    }

    #[test]
    fn test_day_labels() {
        // 2024-03-01 was a Friday.
        let friday = utc(2024, 3, 1, 12);
        assert_eq!(day_label(0, friday, &Utc), "Today");
        assert_eq!(day_label(1, friday, &Utc), "Friday");

        let auckland = FixedOffset::east_opt(13 * 3600).unwrap();
        assert_eq!(day_label(2, friday, &auckland), "Saturday");
    }

    #[test]
    fn test_hour_label() {
        let at = utc(2024, 3, 1, 15);
        assert_eq!(hour_label(at, &Utc), "15:00");
        let pst = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(hour_label(at, &pst), "07:00");
    }

    #[test]
    fn test_temperature_labels() {
        assert_eq!(temperature_label(-0.5), "0°");
        assert_eq!(temperature_label(17.5), "18°");

        let days = bucket_by_day(&five_day_forecast(), &Utc);
        // First day spans 5.0..=12.0
        assert_eq!(temperature_range_label(&days[0]), "12°/5°");
    }
}
