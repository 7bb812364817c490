// src/models/settings.rs
//
// The live settings snapshot pushed over the OSC channel and persisted by
// the settings store. Renderers only ever see a whole snapshot; individual
// fields change through the store and arrive here on the next re-query.

use serde::{Deserialize, Serialize};

/// When the watch should buzz about bluetooth connection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionVibe {
    Disabled,
    Disconnect,
    DisconnectAndReconnect,
}

impl Default for ConnectionVibe {
    fn default() -> Self {
        ConnectionVibe::Disconnect
    }
}

impl From<i32> for ConnectionVibe {
    fn from(value: i32) -> Self {
        match value {
            0 => ConnectionVibe::Disabled,
            2 => ConnectionVibe::DisconnectAndReconnect,
            _ => ConnectionVibe::Disconnect,
        }
    }
}

impl ConnectionVibe {
    pub fn as_i32(self) -> i32 {
        match self {
            ConnectionVibe::Disabled => 0,
            ConnectionVibe::Disconnect => 1,
            ConnectionVibe::DisconnectAndReconnect => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherUnit {
    Celsius,
    Fahrenheit,
}

impl Default for WeatherUnit {
    fn default() -> Self {
        WeatherUnit::Celsius
    }
}

impl From<i32> for WeatherUnit {
    fn from(value: i32) -> Self {
        match value {
            1 => WeatherUnit::Fahrenheit,
            _ => WeatherUnit::Celsius,
        }
    }
}

impl WeatherUnit {
    pub fn as_i32(self) -> i32 {
        match self {
            WeatherUnit::Celsius => 0,
            WeatherUnit::Fahrenheit => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub show_second_hand: bool,
    pub hourly_vibe: bool,
    pub connection_vibe: ConnectionVibe,
    pub enable_health: bool,
    pub invert_colors: bool,
    pub weather_enabled: bool,
    pub weather_unit: WeatherUnit,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_second_hand: true,
            hourly_vibe: false,
            connection_vibe: ConnectionVibe::default(),
            enable_health: false,
            invert_colors: false,
            weather_enabled: true,
            weather_unit: WeatherUnit::default(),
        }
    }
}
