// src/models/weather.rs

use super::settings::WeatherUnit;

/// Latest temperature reading, stored in Celsius and converted on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherSample {
    pub temperature_c: i32,
}

impl WeatherSample {
    pub fn temperature(&self, unit: WeatherUnit) -> i32 {
        match unit {
            WeatherUnit::Celsius => self.temperature_c,
            WeatherUnit::Fahrenheit => self.temperature_c * 9 / 5 + 32,
        }
    }
}

/// Delivery state of the weather service. Failures surface as placeholder
/// text, never as an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherStatus {
    Available,
    Pending,
    Unavailable,
}

/// Label text for the weather surface: a formatted temperature when a
/// sample is available, "??" while a fetch is pending, "--" on failure.
pub fn weather_label(
    sample: Option<WeatherSample>,
    status: WeatherStatus,
    unit: WeatherUnit,
) -> String {
    match (status, sample) {
        (WeatherStatus::Available, Some(sample)) => format!("{}°", sample.temperature(unit)),
        (WeatherStatus::Available, None) | (WeatherStatus::Pending, _) => "??".to_string(),
        (WeatherStatus::Unavailable, _) => "--".to_string(),
    }
}
