//! Turns OpenWeatherMap current conditions and 5-day/3-hour forecasts into the
//! values a weather page shows: per-day min/max summaries, a short hourly
//! window, a heuristic UV index and condition labels.

mod derive;
mod error;
mod forecaster;
pub mod presentation;
mod provider;
mod types;
mod utils;

#[cfg(test)]
mod test_support;

pub use error::{ErrorKind, ForecastError};
pub use forecaster::*;

pub use derive::daily::{bucket_by_day, bucket_by_local_day};
pub use derive::hourly::{window_hourly, DEFAULT_HOURLY_WINDOW};
pub use derive::uv_index::{estimate_local_uv_index, estimate_uv_index, MAX_UV_INDEX};

pub use types::condition::{label_for, ConditionGroup, UNKNOWN_CONDITION};
pub use types::daily_summary::DailySummary;
pub use types::location::{LatLon, Place};
pub use types::sample::{Condition, CurrentConditions, Sample};

pub use provider::error::{LocationError, ProviderError};
pub use provider::openweather::{
    OpenWeather, API_KEY_ENV, DEFAULT_FORECAST_URL, DEFAULT_GEO_URL, DEFAULT_WEATHER_URL,
};
pub use provider::{FixedPosition, Geolocator, WeatherSource};

pub use utils::round_half_up;
