// src/services/ticker.rs
//
// The tick timer subscription. The host update loop polls this once per
// frame with the current wall clock; an event is produced only when the
// subscribed unit has rolled over, so a MINUTE subscriber sees nothing on
// second boundaries. At most one subscription is live at a time and
// resubscribing delivers a full resync event on the next poll.

use crate::models::{ClockTime, UnitsChanged};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickGranularity {
    Second,
    Minute,
    Day,
}

/// Opaque subscription handle. A fresh handle is issued per subscribe, so
/// callers can observe that a resubscribe actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

#[derive(Debug, Clone, Copy)]
pub struct TickEvent {
    pub time: ClockTime,
    pub changed: UnitsChanged,
}

pub struct TickService {
    next_handle: u64,
    active: Option<(TickHandle, TickGranularity)>,
    last: Option<ClockTime>,
}

impl Default for TickService {
    fn default() -> Self {
        Self::new()
    }
}

impl TickService {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            active: None,
            last: None,
        }
    }

    /// Replaces any previous subscription and arms a resync: the next poll
    /// reports all units changed.
    pub fn subscribe(&mut self, granularity: TickGranularity) -> TickHandle {
        self.next_handle += 1;
        let handle = TickHandle(self.next_handle);
        self.active = Some((handle, granularity));
        self.last = None;
        handle
    }

    pub fn unsubscribe(&mut self, handle: TickHandle) {
        if self.active.map(|(h, _)| h) == Some(handle) {
            self.active = None;
            self.last = None;
        }
    }

    pub fn handle(&self) -> Option<TickHandle> {
        self.active.map(|(h, _)| h)
    }

    pub fn granularity(&self) -> Option<TickGranularity> {
        self.active.map(|(_, g)| g)
    }

    pub fn poll(&mut self, now: ClockTime) -> Option<TickEvent> {
        let (_, granularity) = self.active?;

        let event = match self.last {
            None => Some(TickEvent {
                time: now,
                changed: UnitsChanged::all(),
            }),
            Some(prev) => {
                let changed = UnitsChanged::between(&prev, &now);
                let fires = match granularity {
                    TickGranularity::Second => changed.any(),
                    TickGranularity::Minute => changed.minute || changed.hour || changed.day,
                    TickGranularity::Day => changed.day,
                };
                if fires {
                    Some(TickEvent { time: now, changed })
                } else {
                    None
                }
            }
        };

        self.last = Some(now);
        event
    }
}
