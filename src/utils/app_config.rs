use std::time::Duration;

use thiserror::Error;

use crate::{
    services::autocomplete_session::SessionConfig,
    types::{
        place::Coordinate,
        search_options::{PlaceTypeFilter, SearchBias},
    },
};

pub const DEFAULT_GOOGLE_HOST: &str = "https://maps.googleapis.com";

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}
fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

#[derive(Debug, Error, PartialEq)]
pub enum AppConfigError {
    #[error("GOOGLE_MAPS_API_KEY must be set")]
    MissingApiKey,

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub google_host: String,
    pub bind_addr: String,
    pub place_type: PlaceTypeFilter,
    pub bias: SearchBias,
    pub request_timeout: Duration,
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, AppConfigError> {
    value
        .parse()
        .map_err(|_| AppConfigError::InvalidValue { name, value })
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_MAPS_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or(AppConfigError::MissingApiKey)?;
        let google_host = lookup("GOOGLE_MAPS_HOST").unwrap_or_else(|| DEFAULT_GOOGLE_HOST.into());
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(default_bind_addr);

        let place_type = match lookup("PLACE_TYPE") {
            Some(v) => parse("PLACE_TYPE", v)?,
            None => PlaceTypeFilter::All,
        };

        let lat = lookup("SEARCH_BIAS_LAT").map(|v| parse::<f64>("SEARCH_BIAS_LAT", v)).transpose()?;
        let lng = lookup("SEARCH_BIAS_LNG").map(|v| parse::<f64>("SEARCH_BIAS_LNG", v)).transpose()?;
        let radius_meters = match lookup("SEARCH_BIAS_RADIUS") {
            Some(v) => match v.parse::<f64>() {
                Ok(r) if r.is_finite() && r >= 0.0 => r,
                _ => return Err(AppConfigError::InvalidValue { name: "SEARCH_BIAS_RADIUS", value: v }),
            },
            None => 0.0,
        };
        let strict_bounds = match lookup("SEARCH_BIAS_STRICT") {
            Some(v) => parse("SEARCH_BIAS_STRICT", v)?,
            None => false,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse("REQUEST_TIMEOUT_SECS", v)?),
            None => default_request_timeout(),
        };

        Ok(Self {
            api_key,
            google_host,
            bind_addr,
            place_type,
            bias: SearchBias {
                coordinate: lat.zip(lng).map(|(lat, lng)| Coordinate::new(lat, lng)),
                radius_meters,
                strict_bounds,
            },
            request_timeout,
        })
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            api_key: self.api_key.clone(),
            host: self.google_host.trim_end_matches('/').to_string(),
            place_type: self.place_type,
            bias: self.bias,
        }
    }
}
