//! Timestamped observations as delivered by the weather provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The weather condition attached to a sample.
///
/// `code` is the provider's numeric condition id (see [`crate::label_for`]),
/// `main` its short group word (e.g. `"Clouds"`), and `icon` an opaque token
/// identifying the icon to render (see [`crate::presentation::icon_url`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub code: u16,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// One time-stamped weather observation or forecast step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub observed_at: DateTime<Utc>,
    /// Degrees Celsius.
    pub temperature: f64,
    pub condition: Condition,
    /// Sky cover in percent (0-100), when the provider reports it.
    pub cloud_cover_percent: Option<u8>,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
    /// Metres per second.
    pub wind_speed: Option<f64>,
}

impl Sample {
    /// Seconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.observed_at.timestamp()
    }
}

/// Current conditions for a location, together with the name the provider
/// resolved the coordinates to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub sample: Sample,
}
