// src/services/connection.rs
//
// Bluetooth connection state stand-in. The real watch polls a connection
// service; here the state is fed over the OSC channel and surfaced as edge
// events to the update loop.

pub struct ConnectionService {
    connected: bool,
    pending: Option<bool>,
}

impl Default for ConnectionService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionService {
    pub fn new() -> Self {
        Self {
            connected: true,
            pending: None,
        }
    }

    /// Current state, readable at any time without consuming events.
    pub fn peek(&self) -> bool {
        self.pending.unwrap_or(self.connected)
    }

    pub fn set_state(&mut self, connected: bool) {
        if connected == self.connected {
            self.pending = None;
        } else {
            self.pending = Some(connected);
        }
    }

    /// Edge event since the last poll, if any.
    pub fn poll(&mut self) -> Option<bool> {
        let state = self.pending.take()?;
        self.connected = state;
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_connected_with_no_events() {
        let mut service = ConnectionService::new();
        assert!(service.peek());
        assert!(service.poll().is_none());
    }

    #[test]
    fn test_state_change_produces_one_edge_event() {
        let mut service = ConnectionService::new();
        service.set_state(false);

        assert_eq!(service.poll(), Some(false));
        assert!(service.poll().is_none());
        assert!(!service.peek());
    }

    #[test]
    fn test_redundant_set_is_silent() {
        let mut service = ConnectionService::new();
        service.set_state(true);
        assert!(service.poll().is_none());
    }

    #[test]
    fn test_toggle_before_poll_collapses() {
        let mut service = ConnectionService::new();
        service.set_state(false);
        service.set_state(true);

        // Back to the original state: nothing left to report
        assert!(service.poll().is_none());
        assert!(service.peek());
    }
}
