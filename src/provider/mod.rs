//! Collaborators that supply raw weather data and coordinates.

pub mod error;
pub mod openweather;
pub(crate) mod wire;

use crate::provider::error::{LocationError, ProviderError};
use crate::types::location::{LatLon, Place};
use crate::types::sample::{CurrentConditions, Sample};
use std::future::Future;

/// Source of raw weather samples for a location.
///
/// [`openweather::OpenWeather`] is the HTTP implementation; tests and other
/// backends can provide their own.
pub trait WeatherSource {
    /// Current conditions at `coordinates`.
    fn fetch_current(
        &self,
        coordinates: LatLon,
    ) -> impl Future<Output = Result<CurrentConditions, ProviderError>> + Send;

    /// The forward forecast at `coordinates`, in the provider's order.
    fn fetch_forecast(
        &self,
        coordinates: LatLon,
    ) -> impl Future<Output = Result<Vec<Sample>, ProviderError>> + Send;

    /// Places matching a free-text query, best match first, at most `limit`.
    fn search_places(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Place>, ProviderError>> + Send;
}

/// Resolves the user's current position.
pub trait Geolocator {
    fn current_position(&self) -> impl Future<Output = Result<LatLon, LocationError>> + Send;
}

/// A [`Geolocator`] that always reports the same coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPosition(pub LatLon);

impl Geolocator for FixedPosition {
    async fn current_position(&self) -> Result<LatLon, LocationError> {
        Ok(self.0)
    }
}
