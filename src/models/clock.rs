// src/models/clock.rs
//
// Wall-clock snapshots and change detection between ticks

use chrono::{Datelike, Local, Timelike, Weekday};

/// Immutable wall-clock snapshot, replaced wholesale on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub day: u32,
    pub weekday: Weekday,
}

impl ClockTime {
    pub fn now() -> Self {
        let t = Local::now();
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
            day: t.day(),
            weekday: t.weekday(),
        }
    }
}

/// Which time units differ between two snapshots. Delivered with each tick
/// event so consumers can skip work for units that did not roll over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitsChanged {
    pub second: bool,
    pub minute: bool,
    pub hour: bool,
    pub day: bool,
}

impl UnitsChanged {
    /// All units flagged, used for the resync event after a (re)subscribe.
    pub fn all() -> Self {
        Self {
            second: true,
            minute: true,
            hour: true,
            day: true,
        }
    }

    pub fn between(prev: &ClockTime, now: &ClockTime) -> Self {
        Self {
            second: prev.second != now.second,
            minute: prev.minute != now.minute,
            hour: prev.hour != now.hour,
            day: prev.day != now.day,
        }
    }

    pub fn any(&self) -> bool {
        self.second || self.minute || self.hour || self.day
    }
}

/// Date label text, e.g. "MON 05". Uppercasing is a plain ASCII transform;
/// non-ASCII day names pass through unchanged.
pub fn date_label(time: &ClockTime) -> String {
    let mut label = format!("{} {:02}", time.weekday, time.day);
    label.make_ascii_uppercase();
    label
}
