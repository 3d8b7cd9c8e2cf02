//! This module provides the main entry point: the [`Forecaster`], which fetches
//! raw samples for a location and derives the report a weather page displays.

use crate::derive::daily::bucket_by_day;
use crate::derive::hourly::{window_hourly, DEFAULT_HOURLY_WINDOW};
use crate::derive::uv_index::estimate_uv_index;
use crate::error::ForecastError;
use crate::presentation::UvLevel;
use crate::provider::{Geolocator, WeatherSource};
use crate::types::condition::label_for;
use crate::types::daily_summary::DailySummary;
use crate::types::location::{LatLon, Place};
use crate::types::sample::{CurrentConditions, Sample};
use bon::bon;
use chrono::{Local, TimeZone};
use log::info;
use serde::Serialize;

/// Everything derived for one location in one update cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    /// Catalog label of the current condition code.
    pub condition_label: &'static str,
    /// Heuristic UV index estimate for the current conditions, 0-11.
    pub uv_index: u8,
    /// Leading forecast steps.
    pub hourly: Vec<Sample>,
    /// One summary per calendar day, in order of first appearance.
    pub daily: Vec<DailySummary>,
}

impl WeatherReport {
    pub fn uv_level(&self) -> UvLevel {
        UvLevel::from_index(self.uv_index)
    }
}

/// Fetches weather for a location and derives a [`WeatherReport`] from it.
///
/// Day bucketing and the UV estimate depend on a time zone; it defaults to the
/// local zone of the machine and can be replaced with [`Forecaster::with_timezone`].
///
/// # Examples
///
/// ```no_run
/// use forecast_digest::{ForecastError, Forecaster, LatLon, OpenWeather};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), ForecastError> {
/// let forecaster = Forecaster::builder()
///     .source(OpenWeather::from_env()?)
///     .build();
///
/// let report = forecaster.report(LatLon(52.3676, 4.9041)).await?;
/// println!(
///     "{} ({}), UV {}",
///     report.current.location_name, report.condition_label, report.uv_index
/// );
/// for day in &report.daily {
///     println!("{}: {:.0}..{:.0}", day.date, day.min_temperature, day.max_temperature);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Forecaster<S, Tz: TimeZone = Local> {
    source: S,
    timezone: Tz,
    hourly_window: usize,
}

#[bon]
impl<S: WeatherSource> Forecaster<S> {
    /// Creates a forecaster in the local time zone.
    ///
    /// `hourly_window` is the number of leading forecast steps kept in
    /// [`WeatherReport::hourly`], 6 unless set.
    #[builder]
    pub fn new(source: S, hourly_window: Option<usize>) -> Self {
        Self {
            source,
            timezone: Local,
            hourly_window: hourly_window.unwrap_or(DEFAULT_HOURLY_WINDOW),
        }
    }
}

impl<S: WeatherSource, Tz: TimeZone> Forecaster<S, Tz> {
    /// Uses `timezone` for day boundaries and the hour of the UV estimate.
    pub fn with_timezone<T: TimeZone>(self, timezone: T) -> Forecaster<S, T> {
        Forecaster {
            source: self.source,
            timezone,
            hourly_window: self.hourly_window,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches current conditions and the forecast for `coordinates` and derives the report.
    ///
    /// Both requests run concurrently. If either fails, no report is produced.
    pub async fn report(&self, coordinates: LatLon) -> Result<WeatherReport, ForecastError> {
        info!("Fetching weather for {:?}", coordinates);
        let (current, forecast) = tokio::try_join!(
            self.source.fetch_current(coordinates),
            self.source.fetch_forecast(coordinates)
        )?;
        Ok(self.derive(current, &forecast))
    }

    /// Resolves `query` to the best matching place and reports on it.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::PlaceNotFound`] if the search yields nothing,
    /// including for queries shorter than two characters.
    pub async fn report_for_place(
        &self,
        query: &str,
    ) -> Result<(Place, WeatherReport), ForecastError> {
        let place = self
            .source
            .search_places(query, 1)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ForecastError::PlaceNotFound(query.trim().to_string()))?;
        info!("Resolved {:?} to {}", query, place.display_name());

        let report = self.report(place.coordinates()).await?;
        Ok((place, report))
    }

    /// Reports on the position given by `geolocator`.
    pub async fn report_for_position<G: Geolocator>(
        &self,
        geolocator: &G,
    ) -> Result<WeatherReport, ForecastError> {
        let coordinates = geolocator.current_position().await?;
        self.report(coordinates).await
    }

    /// Derives a report from already fetched data. Missing cloud cover counts as clear sky.
    pub fn derive(&self, current: CurrentConditions, forecast: &[Sample]) -> WeatherReport {
        let uv_index = estimate_uv_index(
            current.sample.observed_at,
            current.sample.cloud_cover_percent.unwrap_or(0),
            &self.timezone,
        );
        let hourly = window_hourly(forecast, self.hourly_window).to_vec();
        let daily = bucket_by_day(forecast, &self.timezone);
        info!(
            "Derived {} hourly steps and {} days for {}",
            hourly.len(),
            daily.len(),
            current.location_name
        );

        WeatherReport {
            condition_label: label_for(current.sample.condition.code),
            uv_index,
            hourly,
            daily,
            current,
        }
    }
}
