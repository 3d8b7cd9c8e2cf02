//! Buckets a hand-made 3-hour forecast by day in two time zones, without any network access.

use chrono::{Duration, FixedOffset, TimeZone, Utc};
use forecast_digest::presentation::temperature_range_label;
use forecast_digest::{bucket_by_day, window_hourly, Condition, Sample, DEFAULT_HOURLY_WINDOW};

fn main() {
    let start = Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap();
    let samples: Vec<Sample> = (0..16)
        .map(|step| Sample {
            observed_at: start + Duration::hours(3 * step),
            temperature: 8.0 + (step % 8) as f64,
            condition: Condition {
                code: if step % 8 < 4 { 500 } else { 801 },
                main: "Rain".to_string(),
                description: "light rain".to_string(),
                icon: "10d".to_string(),
            },
            cloud_cover_percent: None,
            feels_like: None,
            humidity: None,
            wind_speed: None,
        })
        .collect();

    let hourly = window_hourly(&samples, DEFAULT_HOURLY_WINDOW);
    println!("Hourly window holds {} of {} samples", hourly.len(), samples.len());

    let zones = [
        ("UTC", FixedOffset::east_opt(0).unwrap()),
        ("UTC-7", FixedOffset::west_opt(7 * 3600).unwrap()),
    ];
    for (name, tz) in zones {
        println!("\n--- Days in {} ---", name);
        for day in bucket_by_day(&samples, &tz) {
            println!(
                "{}  code {}  {}",
                day.date,
                day.condition.code,
                temperature_range_label(&day)
            );
        }
    }
}
