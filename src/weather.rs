use std::fmt;

use reqwest::{Client, Request, Url};
use tracing::{debug, error, info};

use crate::error::AppError;

mod response;

pub const FORECAST_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/forecast";

const REDACTED: &str = "***";

/// Unit system the API reports temperatures in
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Units {
    /// Celsius
    #[default]
    Metric,
    /// Fahrenheit
    Imperial,
    /// Kelvin
    Standard,
}

impl Units {
    fn as_query_value(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub fn temperature_symbol(self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => " K",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Location {
    City(String),
    Coordinates { lat: f64, lon: f64 },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::City(name) => write!(f, "{name}"),
            Location::Coordinates { lat, lon } => write!(f, "{lat},{lon}"),
        }
    }
}

/// Parameters of a single forecast request
#[derive(Clone, Debug)]
pub struct ForecastQuery {
    api_key: String,
    location: Location,
    units: Units,
    count: Option<u32>,
}

impl ForecastQuery {
    pub fn new(api_key: impl Into<String>, location: Location) -> Self {
        Self {
            api_key: api_key.into(),
            location,
            units: Units::default(),
            count: None,
        }
    }

    pub fn units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// Limits the number of forecast entries the API returns (`cnt`)
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = match &self.location {
            Location::City(name) => vec![("q", name.clone())],
            Location::Coordinates { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
        };
        pairs.push(("appid", self.api_key.clone()));
        pairs.push(("units", self.units.as_query_value().to_string()));
        if let Some(count) = self.count {
            pairs.push(("cnt", count.to_string()));
        }
        pairs
    }
}

/// Builds the GET request for `query` against `endpoint`.
///
/// The query string is appended to the endpoint, so host and path are always
/// the endpoint's own whatever the location or count.
pub fn build_request(
    client: &Client,
    endpoint: &str,
    query: &ForecastQuery,
) -> Result<Request, AppError> {
    Ok(client.get(endpoint).query(&query.query_pairs()).build()?)
}

/// Renders `url` with the `appid` value masked, for logs and error messages.
pub fn redacted_url(url: &Url) -> String {
    let mut url = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "appid" {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    if !pairs.is_empty() {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
    url.to_string()
}

/// Fetches the forecast for `query` with a single GET request.
///
/// # Returns
/// * `WeatherResponse` parsed from a 2xx body
/// * `AppError::HttpStatus` for any other status, carrying the API's own
///   error message when the body has one
/// * `AppError::Request` / `AppError::Json` for transport and decoding failures
pub async fn get_forecast(
    client: &Client,
    endpoint: &str,
    query: &ForecastQuery,
) -> Result<response::WeatherResponse, AppError> {
    info!("Fetching forecast data for location: {}", query.location);

    let request = build_request(client, endpoint, query)?;
    let url = redacted_url(request.url());
    debug!("GET {}", url);

    let response = client.execute(request).await?;
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        let weather_response: response::WeatherResponse = serde_json::from_str(&body)?;
        debug!("Forecast data fetched successfully: {:?}", weather_response);
        Ok(weather_response)
    } else {
        error!("Failed to fetch forecast data: {} ({})", status, url);
        let message = serde_json::from_str::<response::ApiErrorBody>(&body)
            .ok()
            .map(|body| body.message);
        Err(AppError::HttpStatus {
            status,
            url,
            message,
        })
    }
}
