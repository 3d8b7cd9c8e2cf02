//! Prints current conditions and the forecast for a city given on the command line.
//!
//! Requires the `OPENWEATHER_API_KEY` environment variable.
//! Run with `cargo run --example report_for_city -- "Amsterdam"`.

use forecast_digest::presentation::{
    day_label, hour_label, temperature_label, temperature_range_label, uv_label, wind_speed_kmh,
};
use forecast_digest::{label_for, ForecastError, Forecaster, OpenWeather};

#[tokio::main]
async fn main() -> Result<(), ForecastError> {
    let city = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Amsterdam".to_string());

    let forecaster = Forecaster::builder()
        .source(OpenWeather::from_env()?)
        .build();

    let (place, report) = match forecaster.report_for_place(&city).await {
        Ok(found) => found,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e);
        }
    };
    let current = &report.current.sample;

    println!("--- {} ---", place.display_name());
    println!(
        "{} {}",
        report.condition_label,
        temperature_label(current.temperature)
    );
    if let Some(feels_like) = current.feels_like {
        println!("Real feel: {}", temperature_label(feels_like));
    }
    if let Some(wind) = current.wind_speed {
        println!("Wind: {} km/h", wind_speed_kmh(wind));
    }
    if let Some(humidity) = current.humidity {
        println!("Humidity: {}%", humidity);
    }
    println!("UV index: {}", uv_label(report.uv_index));

    println!("\n--- Next hours ---");
    for step in &report.hourly {
        println!(
            "{}  {:>4}  {}",
            hour_label(step.observed_at, &chrono::Local),
            temperature_label(step.temperature),
            step.condition.description
        );
    }

    println!("\n--- Next days ---");
    for (i, day) in report.daily.iter().enumerate() {
        println!(
            "{:<10} {:<25} {}",
            day_label(i, day.representative_at, &chrono::Local),
            label_for(day.condition.code),
            temperature_range_label(day)
        );
    }
    Ok(())
}
