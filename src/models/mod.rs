pub mod clock;
pub mod geometry;
pub mod settings;
pub mod weather;

pub use clock::{date_label, ClockTime, UnitsChanged};
pub use geometry::{crop, point_on_boundary, DisplayShape};
pub use settings::{ConnectionVibe, Settings, WeatherUnit};
pub use weather::{weather_label, WeatherSample, WeatherStatus};
