//! Response shapes of the OpenWeatherMap endpoints, and their mapping onto
//! [`Sample`]. Only the fields this crate reads are declared.

use crate::types::location::Place;
use crate::types::sample::{Condition, CurrentConditions, Sample};
use chrono::DateTime;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct MainBlock {
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeatherBlock {
    pub id: u16,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CloudsBlock {
    pub all: u8,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WindBlock {
    pub speed: f64,
}

/// One observation: the body of `/weather`, or one entry of `/forecast`'s `list`.
#[derive(Debug, Deserialize)]
pub(crate) struct Observation {
    pub dt: i64,
    pub main: MainBlock,
    #[serde(default)]
    pub weather: Vec<WeatherBlock>,
    pub clouds: Option<CloudsBlock>,
    pub wind: Option<WindBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    #[serde(flatten)]
    pub observation: Observation,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub list: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeoPlace {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: String,
    pub state: Option<String>,
}

impl Observation {
    /// Converts to a [`Sample`], failing with a reason when the observation
    /// has no condition entry or a timestamp chrono cannot represent.
    pub(crate) fn into_sample(self) -> Result<Sample, String> {
        let observed_at = DateTime::from_timestamp(self.dt, 0)
            .ok_or_else(|| format!("timestamp {} is out of range", self.dt))?;
        let weather = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| format!("observation at {} has no weather entry", self.dt))?;

        Ok(Sample {
            observed_at,
            temperature: self.main.temp,
            condition: Condition {
                code: weather.id,
                main: weather.main,
                description: weather.description,
                icon: weather.icon,
            },
            cloud_cover_percent: self.clouds.map(|c| c.all),
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            wind_speed: self.wind.map(|w| w.speed),
        })
    }
}

impl CurrentResponse {
    pub(crate) fn into_current(self) -> Result<CurrentConditions, String> {
        Ok(CurrentConditions {
            location_name: self.name,
            sample: self.observation.into_sample()?,
        })
    }
}

impl ForecastResponse {
    pub(crate) fn into_samples(self) -> Result<Vec<Sample>, String> {
        self.list.into_iter().map(Observation::into_sample).collect()
    }
}

impl From<GeoPlace> for Place {
    fn from(place: GeoPlace) -> Self {
        Place {
            name: place.name,
            country: place.country,
            state: place.state,
            latitude: place.lat,
            longitude: place.lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current_body() -> serde_json::Value {
        json!({
            "coord": {"lon": 4.89, "lat": 52.37},
            "weather": [{
                "id": 803,
                "main": "Clouds",
                "description": "broken clouds",
                "icon": "04d"
            }],
            "main": {
                "temp": 14.62,
                "feels_like": 13.9,
                "temp_min": 13.1,
                "temp_max": 15.8,
                "pressure": 1012,
                "humidity": 72
            },
            "wind": {"speed": 5.14, "deg": 240},
            "clouds": {"all": 75},
            "dt": 1_718_964_000,
            "name": "Amsterdam",
            "cod": 200
        })
    }

    #[test]
    fn test_current_response_maps_fields() {
        let response: CurrentResponse = serde_json::from_value(current_body()).unwrap();
        let current = response.into_current().unwrap();

        assert_eq!(current.location_name, "Amsterdam");
        assert_eq!(current.sample.timestamp(), 1_718_964_000);
        assert_eq!(current.sample.temperature, 14.62);
        assert_eq!(current.sample.condition.code, 803);
        assert_eq!(current.sample.condition.main, "Clouds");
        assert_eq!(current.sample.condition.description, "broken clouds");
        assert_eq!(current.sample.condition.icon, "04d");
        assert_eq!(current.sample.cloud_cover_percent, Some(75));
        assert_eq!(current.sample.feels_like, Some(13.9));
        assert_eq!(current.sample.humidity, Some(72));
        assert_eq!(current.sample.wind_speed, Some(5.14));
    }

    #[test]
    fn test_missing_weather_entry_is_rejected() {
        let mut body = current_body();
        body["weather"] = json!([]);
        let response: CurrentResponse = serde_json::from_value(body).unwrap();
        let err = response.into_current().unwrap_err();
        assert!(err.contains("no weather entry"), "{}", err);
    }

    #[test]
    fn test_unrepresentable_timestamp_is_rejected() {
        let mut body = current_body();
        body["dt"] = json!(i64::MAX);
        let response: CurrentResponse = serde_json::from_value(body).unwrap();
        let err = response.into_current().unwrap_err();
        assert!(err.contains("out of range"), "{}", err);
    }

    #[test]
    fn test_missing_temperature_fails_to_parse() {
        let mut body = current_body();
        body["main"] = json!({"humidity": 40});
        assert!(serde_json::from_value::<CurrentResponse>(body).is_err());
    }

    #[test]
    fn test_forecast_entries_without_clouds() {
        let body = json!({
            "cod": "200",
            "cnt": 2,
            "list": [
                {
                    "dt": 1_718_964_000,
                    "main": {"temp": 12.0},
                    "weather": [{
                        "id": 500,
                        "main": "Rain",
                        "description": "light rain",
                        "icon": "10d"
                    }]
                },
                {
                    "dt": 1_718_974_800,
                    "main": {"temp": 15.5},
                    "weather": [{
                        "id": 800,
                        "main": "Clear",
                        "description": "clear sky",
                        "icon": "01d"
                    }],
                    "clouds": {"all": 0}
                }
            ]
        });
        let samples = serde_json::from_value::<ForecastResponse>(body)
            .unwrap()
            .into_samples()
            .unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].cloud_cover_percent, None);
        assert_eq!(samples[1].cloud_cover_percent, Some(0));
        assert_eq!(samples[1].temperature, 15.5);
    }

    #[test]
    fn test_geo_place_conversion() {
        let geo: GeoPlace = serde_json::from_value(json!({
            "name": "Utrecht",
            "local_names": {"nl": "Utrecht"},
            "lat": 52.0907,
            "lon": 5.1214,
            "country": "NL",
            "state": "Utrecht"
        }))
        .unwrap();
        let place = Place::from(geo);
        assert_eq!(place.display_name(), "Utrecht, Utrecht, NL");
        assert_eq!(place.latitude, 52.0907);
    }
}
