use std::fmt;

use crate::error::AppError;
use crate::weather::Units;

/// The three fields printed for a successful lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub city: String,
    pub description: String,
    pub temperature: serde_json::Number,
    pub units: Units,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "City: {}", self.city)?;
        writeln!(f, "Weather: {}", self.description)?;
        write!(
            f,
            "Temperature: {}{}",
            self.temperature,
            self.units.temperature_symbol()
        )
    }
}

/// One-line message for a failed run.
///
/// Non-2xx responses get their own prefix, everything else (transport,
/// decoding, missing fields) shares the generic one.
pub fn failure_line(err: &anyhow::Error) -> String {
    let http_status = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<AppError>())
        .find(|app_err| app_err.is_http_status());

    match http_status {
        Some(app_err) => format!("HTTP error occurred: {app_err}"),
        None => format!("An error occurred: {err:#}"),
    }
}
