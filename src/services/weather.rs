// src/services/weather.rs
//
// Weather delivery stand-in for the phone-side fetcher. Reports are pushed
// over the OSC channel; the service holds the latest sample and a tri-state
// delivery status. Subscription discipline matters more than the data here:
// at most one handle is live, and nothing is delivered while unsubscribed.

use crate::models::{WeatherSample, WeatherStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherHandle(u64);

pub struct WeatherService {
    next_handle: u64,
    active: Option<WeatherHandle>,
    sample: Option<WeatherSample>,
    status: WeatherStatus,
    pending_event: bool,
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherService {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            active: None,
            sample: None,
            status: WeatherStatus::Pending,
            pending_event: false,
        }
    }

    pub fn subscribe(&mut self) -> WeatherHandle {
        self.next_handle += 1;
        let handle = WeatherHandle(self.next_handle);
        self.active = Some(handle);
        // Any retained sample is stale until the fetcher reports again
        self.status = WeatherStatus::Pending;
        handle
    }

    pub fn unsubscribe(&mut self, handle: WeatherHandle) {
        if self.active == Some(handle) {
            self.active = None;
            self.pending_event = false;
        }
    }

    pub fn handle(&self) -> Option<WeatherHandle> {
        self.active
    }

    pub fn peek(&self) -> (Option<WeatherSample>, WeatherStatus) {
        (self.sample, self.status)
    }

    /// A temperature report arrived from the fetcher. Ignored while
    /// unsubscribed, like any other delivery.
    pub fn report(&mut self, temperature_c: i32) {
        if self.active.is_none() {
            return;
        }
        self.sample = Some(WeatherSample { temperature_c });
        self.status = WeatherStatus::Available;
        self.pending_event = true;
    }

    /// The fetch failed; the last sample (if any) is kept but the status
    /// flips to unavailable.
    pub fn fail(&mut self) {
        if self.active.is_none() {
            return;
        }
        self.status = WeatherStatus::Unavailable;
        self.pending_event = true;
    }

    pub fn poll(&mut self) -> Option<(Option<WeatherSample>, WeatherStatus)> {
        if self.pending_event {
            self.pending_event = false;
            Some((self.sample, self.status))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_until_first_report() {
        let mut service = WeatherService::new();
        service.subscribe();

        assert_eq!(service.peek(), (None, WeatherStatus::Pending));
        assert!(service.poll().is_none());
    }

    #[test]
    fn test_resubscribe_resets_status_to_pending() {
        let mut service = WeatherService::new();
        let handle = service.subscribe();
        service.report(18);
        service.poll();

        service.unsubscribe(handle);
        service.subscribe();

        // The retained sample is no longer presented as current
        let (sample, status) = service.peek();
        assert_eq!(sample, Some(WeatherSample { temperature_c: 18 }));
        assert_eq!(status, WeatherStatus::Pending);
    }

    #[test]
    fn test_report_delivers_one_event() {
        let mut service = WeatherService::new();
        service.subscribe();
        service.report(18);

        let (sample, status) = service.poll().unwrap();
        assert_eq!(sample, Some(WeatherSample { temperature_c: 18 }));
        assert_eq!(status, WeatherStatus::Available);
        assert!(service.poll().is_none());
    }

    #[test]
    fn test_failure_keeps_last_sample() {
        let mut service = WeatherService::new();
        service.subscribe();
        service.report(18);
        service.poll();

        service.fail();
        let (sample, status) = service.poll().unwrap();
        assert_eq!(sample, Some(WeatherSample { temperature_c: 18 }));
        assert_eq!(status, WeatherStatus::Unavailable);
    }

    #[test]
    fn test_reports_ignored_while_unsubscribed() {
        let mut service = WeatherService::new();
        service.report(25);
        service.fail();

        assert!(service.poll().is_none());
        assert_eq!(service.peek().0, None);
    }

    #[test]
    fn test_at_most_one_subscription() {
        let mut service = WeatherService::new();
        let first = service.subscribe();
        let second = service.subscribe();

        assert_ne!(first, second);
        assert_eq!(service.handle(), Some(second));

        // The stale handle no longer tears the live one down
        service.unsubscribe(first);
        assert_eq!(service.handle(), Some(second));

        service.unsubscribe(second);
        assert!(service.handle().is_none());
    }
}
