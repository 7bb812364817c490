pub mod connection;
pub mod quiet_time;
pub mod settings_store;
pub mod ticker;
pub mod vibration;
pub mod weather;

pub use connection::ConnectionService;
pub use quiet_time::QuietTimeService;
pub use settings_store::SettingsStore;
pub use ticker::{TickEvent, TickGranularity, TickHandle, TickService};
pub use vibration::{VibePattern, VibrationService};
pub use weather::{WeatherHandle, WeatherService};
