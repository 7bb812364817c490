// src/services/vibration.rs
//
// Vibration pattern subsystem stand-in. Decides WHICH pattern an event
// warrants; the host prints it in place of driving a motor.

use std::fmt;

use crate::models::{ConnectionVibe, Settings};
use crate::services::TickEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibePattern {
    /// Double pulse on the top of the hour.
    HourlyChime,
    /// Long buzz when the phone link drops.
    ConnectionLost,
    /// Short buzz when the phone link comes back.
    ConnectionRestored,
}

impl fmt::Display for VibePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VibePattern::HourlyChime => write!(f, "hourly chime (double pulse)"),
            VibePattern::ConnectionLost => write!(f, "connection lost (long buzz)"),
            VibePattern::ConnectionRestored => write!(f, "connection restored (short buzz)"),
        }
    }
}

pub struct VibrationService {
    hourly: bool,
    connection: ConnectionVibe,
}

impl Default for VibrationService {
    fn default() -> Self {
        Self::new()
    }
}

impl VibrationService {
    pub fn new() -> Self {
        Self {
            hourly: false,
            connection: ConnectionVibe::Disabled,
        }
    }

    /// Re-applied on every settings update.
    pub fn configure(&mut self, settings: &Settings) {
        self.hourly = settings.hourly_vibe;
        self.connection = settings.connection_vibe;
    }

    /// Hourly chime fires on the hour rollover, not on the resync event a
    /// fresh subscription delivers mid-hour.
    pub fn on_tick(&self, event: &TickEvent) -> Option<VibePattern> {
        if self.hourly && event.changed.hour && event.time.minute == 0 && event.time.second == 0 {
            Some(VibePattern::HourlyChime)
        } else {
            None
        }
    }

    pub fn on_connection(&self, connected: bool) -> Option<VibePattern> {
        match (self.connection, connected) {
            (ConnectionVibe::Disabled, _) => None,
            (_, false) => Some(VibePattern::ConnectionLost),
            (ConnectionVibe::DisconnectAndReconnect, true) => {
                Some(VibePattern::ConnectionRestored)
            }
            (ConnectionVibe::Disconnect, true) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, UnitsChanged};
    use chrono::Weekday;

    fn tick(hour: u32, minute: u32, second: u32, hour_changed: bool) -> TickEvent {
        TickEvent {
            time: ClockTime {
                hour,
                minute,
                second,
                day: 10,
                weekday: Weekday::Thu,
            },
            changed: UnitsChanged {
                second: true,
                minute: minute == 0,
                hour: hour_changed,
                day: false,
            },
        }
    }

    fn configured(hourly: bool, connection: ConnectionVibe) -> VibrationService {
        let mut service = VibrationService::new();
        service.configure(&Settings {
            hourly_vibe: hourly,
            connection_vibe: connection,
            ..Settings::default()
        });
        service
    }

    #[test]
    fn test_hourly_chime_on_the_hour() {
        let service = configured(true, ConnectionVibe::Disabled);
        assert_eq!(
            service.on_tick(&tick(10, 0, 0, true)),
            Some(VibePattern::HourlyChime)
        );
        assert!(service.on_tick(&tick(10, 0, 1, false)).is_none());
    }

    #[test]
    fn test_hourly_chime_respects_setting() {
        let service = configured(false, ConnectionVibe::Disabled);
        assert!(service.on_tick(&tick(10, 0, 0, true)).is_none());
    }

    #[test]
    fn test_resync_mid_hour_does_not_chime() {
        let service = configured(true, ConnectionVibe::Disabled);
        // Resync events flag the hour as changed even at minute 23
        assert!(service.on_tick(&tick(10, 23, 7, true)).is_none());
    }

    #[test]
    fn test_connection_vibe_modes() {
        let disabled = configured(false, ConnectionVibe::Disabled);
        assert!(disabled.on_connection(false).is_none());
        assert!(disabled.on_connection(true).is_none());

        let disconnect = configured(false, ConnectionVibe::Disconnect);
        assert_eq!(
            disconnect.on_connection(false),
            Some(VibePattern::ConnectionLost)
        );
        assert!(disconnect.on_connection(true).is_none());

        let both = configured(false, ConnectionVibe::DisconnectAndReconnect);
        assert_eq!(both.on_connection(false), Some(VibePattern::ConnectionLost));
        assert_eq!(
            both.on_connection(true),
            Some(VibePattern::ConnectionRestored)
        );
    }
}
