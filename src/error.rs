use crate::provider::error::{LocationError, ProviderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("No place found matching '{0}'")]
    PlaceNotFound(String),
}

/// Broad category of a [`ForecastError`], used to pick the message shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Api,
    Network,
    Location,
    General,
}

impl ErrorKind {
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::Api => "Weather data unavailable. Please try again later.",
            ErrorKind::Network => "Please check your internet connection.",
            ErrorKind::Location => {
                "Unable to get your location. Please allow location access or search for a city."
            }
            ErrorKind::General => "Something went wrong. Please try again.",
        }
    }
}

impl ForecastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::Provider(ProviderError::NetworkRequest(..)) => ErrorKind::Network,
            ForecastError::Provider(
                ProviderError::HttpStatus { .. }
                | ProviderError::JsonParse { .. }
                | ProviderError::MalformedResponse { .. },
            ) => ErrorKind::Api,
            ForecastError::Provider(
                ProviderError::MissingApiKey(_) | ProviderError::ClientBuild(_),
            ) => ErrorKind::General,
            ForecastError::Location(
                LocationError::PermissionDenied | LocationError::Unsupported,
            ) => ErrorKind::Location,
            ForecastError::Location(LocationError::Timeout | LocationError::Unavailable(_)) => {
                ErrorKind::General
            }
            ForecastError::PlaceNotFound(_) => ErrorKind::Api,
        }
    }

    /// Message suitable for showing to an end user in place of the weather.
    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}
