// src/services/quiet_time.rs
//
// Do-not-disturb state, polled at draw time. No subscription exists on the
// watch either; the glyph simply queries the platform every redraw.

pub struct QuietTimeService {
    active: bool,
}

impl Default for QuietTimeService {
    fn default() -> Self {
        Self::new()
    }
}

impl QuietTimeService {
    pub fn new() -> Self {
        Self { active: false }
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
