//! HTTP client for the OpenWeatherMap current weather, 5-day/3-hour forecast
//! and direct geocoding endpoints.

use crate::provider::error::ProviderError;
use crate::provider::wire::{CurrentResponse, ForecastResponse, GeoPlace};
use crate::provider::WeatherSource;
use crate::types::location::{LatLon, Place};
use crate::types::sample::{CurrentConditions, Sample};
use bon::bon;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use std::time::Duration;

/// Environment variable read by [`OpenWeather::from_env`].
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";
pub const DEFAULT_GEO_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Shorter search queries are answered with no results and no request.
const MIN_QUERY_CHARS: usize = 2;

/// OpenWeatherMap client, always requesting metric units.
///
/// # Examples
///
/// ```rust
/// # use forecast_digest::{OpenWeather, ProviderError};
/// # fn run() -> Result<(), ProviderError> {
/// let client = OpenWeather::builder()
///     .api_key("my-api-key")
///     .timeout(std::time::Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenWeather {
    client: Client,
    api_key: String,
    weather_url: String,
    forecast_url: String,
    geo_url: String,
}

#[bon]
impl OpenWeather {
    /// Creates a client. Endpoint URLs default to the public OpenWeatherMap API
    /// and the request timeout to 10 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ClientBuild`] if the HTTP client cannot be constructed.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        #[builder(into)] weather_url: Option<String>,
        #[builder(into)] forecast_url: Option<String>,
        #[builder(into)] geo_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(ProviderError::ClientBuild)?;

        Ok(Self {
            client,
            api_key,
            weather_url: weather_url.unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string()),
            forecast_url: forecast_url.unwrap_or_else(|| DEFAULT_FORECAST_URL.to_string()),
            geo_url: geo_url.unwrap_or_else(|| DEFAULT_GEO_URL.to_string()),
        })
    }

    /// Creates a client with default endpoints, taking the API key from
    /// the `OPENWEATHER_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] if the variable is unset or not unicode.
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| ProviderError::MissingApiKey(API_KEY_ENV))?;
        Self::builder().api_key(api_key).build()
    }

    fn coordinate_query(coordinates: LatLon) -> [(&'static str, String); 3] {
        [
            ("lat", coordinates.latitude().to_string()),
            ("lon", coordinates.longitude().to_string()),
            ("units", "metric".to_string()),
        ]
    }

    /// Issues a GET to `url` and decodes the JSON body.
    ///
    /// The API key is appended here and kept out of logs and errors.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        info!("Requesting {} with {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::NetworkRequest(url.to_string(), e.without_url()))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                let e = e.without_url();
                warn!("HTTP error for {}: {:?}", url, e.status());
                return Err(if let Some(status) = e.status() {
                    ProviderError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    ProviderError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::NetworkRequest(url.to_string(), e.without_url()))?;
        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(|e| match e.classify() {
            // Valid JSON of the wrong shape, e.g. a missing `main.temp`.
            Category::Data => Self::malformed(url, e.to_string()),
            _ => ProviderError::JsonParse {
                url: url.to_string(),
                source: e,
            },
        })
    }

    fn malformed(url: &str, reason: String) -> ProviderError {
        warn!("Malformed response from {}: {}", url, reason);
        ProviderError::MalformedResponse {
            url: url.to_string(),
            reason,
        }
    }
}

impl WeatherSource for OpenWeather {
    async fn fetch_current(&self, coordinates: LatLon) -> Result<CurrentConditions, ProviderError> {
        let response: CurrentResponse = self
            .get_json(&self.weather_url, &Self::coordinate_query(coordinates))
            .await?;
        response
            .into_current()
            .map_err(|reason| Self::malformed(&self.weather_url, reason))
    }

    async fn fetch_forecast(&self, coordinates: LatLon) -> Result<Vec<Sample>, ProviderError> {
        let response: ForecastResponse = self
            .get_json(&self.forecast_url, &Self::coordinate_query(coordinates))
            .await?;
        let samples = response
            .into_samples()
            .map_err(|reason| Self::malformed(&self.forecast_url, reason))?;
        info!("Received {} forecast samples", samples.len());
        Ok(samples)
    }

    async fn search_places(&self, query: &str, limit: usize) -> Result<Vec<Place>, ProviderError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            debug!("Search query {:?} too short, skipping request", query);
            return Ok(Vec::new());
        }

        let params = [("q", query.to_string()), ("limit", limit.to_string())];
        match self.get_json::<Vec<GeoPlace>>(&self.geo_url, &params).await {
            Ok(places) => Ok(places.into_iter().map(Place::from).collect()),
            Err(ProviderError::HttpStatus { status, .. }) if status == StatusCode::BAD_REQUEST => {
                info!("Geocoder rejected query {:?}, treating as no results", query);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
