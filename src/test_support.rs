use crate::types::sample::{Condition, Sample};
use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

pub(crate) fn condition(code: u16) -> Condition {
    Condition {
        code,
        main: "Clouds".to_string(),
        description: format!("condition {}", code),
        icon: format!("{}d", code),
    }
}

pub(crate) fn sample(observed_at: DateTime<Utc>, temperature: f64, code: u16) -> Sample {
    Sample {
        observed_at,
        temperature,
        condition: condition(code),
        cloud_cover_percent: None,
        feels_like: None,
        humidity: None,
        wind_speed: None,
    }
}

/// Five days of 3-hour steps starting at midnight UTC on 2024-03-01.
pub(crate) fn five_day_forecast() -> Vec<Sample> {
    let start = utc(2024, 3, 1, 0);
    (0..40)
        .map(|step| {
            let at = start + chrono::Duration::hours(3 * step);
            let temperature = 5.0 + (step % 8) as f64 + (step / 8) as f64 * 0.5;
            sample(at, temperature, 800 + (step % 5) as u16)
        })
        .collect()
}
