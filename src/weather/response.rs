use crate::error::AppError;
use crate::report::Summary;

use super::Units;

/// Response structure for the OpenWeatherMap forecast endpoint
/// Only the fields used by the report are modelled, everything else is ignored
#[derive(serde::Deserialize, Debug)]
pub struct WeatherResponse {
    /// Name of the resolved location (e.g., "London")
    #[serde(default)]
    pub name: Option<String>,
    /// Ordered weather conditions, the first one is the primary condition
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    /// Main readings (temperature)
    #[serde(default)]
    pub main: Option<MainReadings>,
}

/// Weather condition description
#[derive(serde::Deserialize, Debug)]
pub struct WeatherCondition {
    /// Human-readable description of the condition (e.g., "light rain")
    pub description: Option<String>,
}

#[derive(serde::Deserialize, Debug)]
pub struct MainReadings {
    /// Temperature in the requested units, kept as written in the body
    pub temp: Option<serde_json::Number>,
}

/// Error body returned by the API alongside non-2xx statuses,
/// e.g. `{"cod": 401, "message": "Invalid API key"}`
#[derive(serde::Deserialize, Debug)]
pub struct ApiErrorBody {
    pub message: String,
}

impl WeatherResponse {
    /// Extracts the three report fields, failing on the first one that is absent.
    pub fn summary(&self, units: Units) -> Result<Summary, AppError> {
        let city = self.name.clone().ok_or(AppError::MissingField("name"))?;

        let description = self
            .weather
            .first()
            .ok_or(AppError::MissingField("weather[0]"))?
            .description
            .clone()
            .ok_or(AppError::MissingField("weather[0].description"))?;

        let temperature = self
            .main
            .as_ref()
            .ok_or(AppError::MissingField("main"))?
            .temp
            .clone()
            .ok_or(AppError::MissingField("main.temp"))?;

        Ok(Summary {
            city,
            description,
            temperature,
            units,
        })
    }
}
