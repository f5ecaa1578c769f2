use std::time::Duration;

use clap::Parser;

use crate::weather::{FORECAST_ENDPOINT, ForecastQuery, Location, Units};

const DEFAULT_CITY: &str = "London";

/// Print the current weather for a city or coordinate pair.
#[derive(Parser, Clone, Debug)]
#[command(version)]
pub struct Cli {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// City name, e.g. "London" or "London,GB" [default: London]
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub city: Option<String>,

    /// Latitude, used together with --lon instead of --city
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude, used together with --lat instead of --city
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Number of forecast entries to request
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Units for the reported temperature
    #[arg(long, value_enum, default_value_t = Units::Metric)]
    pub units: Units,

    /// Forecast endpoint URL
    #[arg(long, env = "OPENWEATHER_ENDPOINT", default_value = FORECAST_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn location(&self) -> Location {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Location::Coordinates { lat, lon },
            _ => Location::City(
                self.city
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CITY.to_string()),
            ),
        }
    }

    pub fn query(&self) -> ForecastQuery {
        let query = ForecastQuery::new(self.api_key.clone(), self.location()).units(self.units);
        match self.count {
            Some(count) => query.count(count),
            None => query,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
