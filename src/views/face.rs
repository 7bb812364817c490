// src/views/face.rs
//
// The FaceInstance is the composition root and state cache: it owns the
// one current snapshot of time, connection state, settings, and weather,
// the child surfaces with their dirty flags, and the cached label text.
// Event handlers mutate it; the draw pass only reads and clears flags.
// No drawing-time state survives a frame.

use nannou::prelude::*;

use crate::config::PlatformCapabilities;
use crate::draw::{
    draw_hands, draw_ticks, text_draw, Palette,
};
use crate::models::{
    date_label, weather_label, ClockTime, DisplayShape, Settings, WeatherSample, WeatherStatus,
};
use crate::services::{
    TickEvent, TickGranularity, TickService, VibrationService, WeatherService,
};
use crate::views::{FaceLayout, Surface};

pub struct FaceInstance {
    shape: DisplayShape,

    // cached snapshots, replaced wholesale by event handlers
    time: ClockTime,
    connected: bool,
    settings: Settings,
    weather_sample: Option<WeatherSample>,
    weather_status: WeatherStatus,

    // cached label text, recomputed only when the owning surface dirties
    date_text: String,
    weather_text: String,

    // child surfaces
    pub ticks: Surface,
    pub hands: Surface,
    pub date: Surface,
    pub weather: Surface,
    pub quiet: Surface,
}

impl FaceInstance {
    pub fn new(
        caps: PlatformCapabilities,
        window: Rect,
        settings: Settings,
        now: ClockTime,
        connected: bool,
    ) -> Self {
        let shape = if caps.round_screen {
            DisplayShape::Ellipse
        } else {
            DisplayShape::RoundedRect {
                corner_radius: caps.corner_radius,
            }
        };
        let layout = FaceLayout::compute(window);

        let mut quiet = Surface::new(layout.quiet);
        quiet.visible = caps.quiet_time;

        Self {
            shape,
            time: now,
            connected,
            settings,
            weather_sample: None,
            weather_status: WeatherStatus::Pending,
            date_text: date_label(&now),
            weather_text: String::new(),
            ticks: Surface::new(layout.face),
            hands: Surface::new(layout.face),
            date: Surface::new(layout.date),
            weather: Surface::new(layout.weather),
            quiet,
        }
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    pub fn weather_text(&self) -> &str {
        &self.weather_text
    }

    /// Timer tick: the hands always redraw; the date only recomputes when
    /// the day rolled over.
    pub fn on_tick(&mut self, event: TickEvent) {
        self.time = event.time;
        self.hands.mark_dirty();

        if event.changed.day {
            self.date_text = date_label(&self.time);
            self.date.mark_dirty();
        }
    }

    /// Settings update. The notification carries no payload, so the caller
    /// re-queries the store and hands in the whole snapshot. Reconfigures
    /// the vibration subsystem, re-subscribes the tick timer at the right
    /// granularity (unsubscribe first — at most one live subscription),
    /// toggles the weather subscription, and resyncs the displayed state
    /// immediately instead of waiting for the next natural tick.
    pub fn apply_settings(
        &mut self,
        settings: Settings,
        ticker: &mut TickService,
        weather: &mut WeatherService,
        vibration: &mut VibrationService,
    ) {
        self.settings = settings;

        vibration.configure(&settings);

        if let Some(handle) = ticker.handle() {
            ticker.unsubscribe(handle);
        }
        let granularity = if settings.show_second_hand {
            TickGranularity::Second
        } else {
            TickGranularity::Minute
        };
        ticker.subscribe(granularity);

        if settings.weather_enabled {
            if weather.handle().is_none() {
                weather.subscribe();
            }
        } else if let Some(handle) = weather.handle() {
            weather.unsubscribe(handle);
        }

        let (sample, status) = weather.peek();
        self.weather_sample = sample;
        self.weather_status = status;
        self.refresh_weather();

        // Immediate resync of the cached display state
        self.date_text = date_label(&self.time);
        self.ticks.mark_dirty();
        self.hands.mark_dirty();
        self.date.mark_dirty();
    }

    /// Connection change: the indicator lives in the hub, so only the
    /// hands surface redraws.
    pub fn on_connection(&mut self, connected: bool) {
        self.connected = connected;
        self.hands.mark_dirty();
    }

    pub fn on_weather(&mut self, sample: Option<WeatherSample>, status: WeatherStatus) {
        self.weather_sample = sample;
        self.weather_status = status;
        self.refresh_weather();
    }

    fn refresh_weather(&mut self) {
        if self.settings.weather_enabled {
            self.weather.visible = true;
            self.weather_text = weather_label(
                self.weather_sample,
                self.weather_status,
                self.settings.weather_unit,
            );
        } else {
            self.weather.visible = false;
            self.weather_text.clear();
        }
        self.weather.mark_dirty();
    }

    /// Redraw pass: pure read of the cached state. Quiet time is polled by
    /// the caller at draw time, matching the platform's no-subscription
    /// query model.
    pub fn draw(&mut self, draw: &Draw, palette: &Palette, quiet_active: bool) {
        draw_ticks(draw, &self.shape, self.ticks.bounds, palette);
        draw_hands(
            draw,
            &self.shape,
            self.hands.bounds,
            &self.time,
            palette,
            self.settings.show_second_hand,
            self.connected,
        );
        text_draw::draw_date(draw, self.date.bounds, &self.date_text, palette);

        if self.weather.visible {
            text_draw::draw_weather(draw, self.weather.bounds, &self.weather_text, palette);
        }
        if self.quiet.visible && quiet_active {
            text_draw::draw_quiet_glyph(draw, self.quiet.bounds, palette);
        }

        self.ticks.clear_dirty();
        self.hands.clear_dirty();
        self.date.clear_dirty();
        self.weather.clear_dirty();
        self.quiet.clear_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnitsChanged;
    use chrono::Weekday;

    fn caps() -> PlatformCapabilities {
        PlatformCapabilities {
            round_screen: true,
            color_screen: true,
            quiet_time: true,
            health: false,
            corner_radius: 10.0,
        }
    }

    fn at(hour: u32, minute: u32, second: u32, day: u32, weekday: Weekday) -> ClockTime {
        ClockTime {
            hour,
            minute,
            second,
            day,
            weekday,
        }
    }

    fn face() -> FaceInstance {
        FaceInstance::new(
            caps(),
            Rect::from_w_h(360.0, 360.0),
            Settings::default(),
            at(10, 30, 0, 5, Weekday::Mon),
            true,
        )
    }

    fn tick(time: ClockTime, changed: UnitsChanged) -> TickEvent {
        TickEvent { time, changed }
    }

    #[test]
    fn test_tick_always_dirties_hands_only() {
        let mut face = face();
        face.hands.clear_dirty();
        face.date.clear_dirty();

        let changed = UnitsChanged {
            second: true,
            ..UnitsChanged::default()
        };
        face.on_tick(tick(at(10, 30, 1, 5, Weekday::Mon), changed));

        assert!(face.hands.is_dirty());
        assert!(!face.date.is_dirty());
        assert_eq!(face.time().second, 1);
    }

    #[test]
    fn test_date_text_untouched_without_day_bit() {
        let mut face = face();
        let before = face.date_text().to_string();

        // The wall clock claims day 6, but the day bit is not set
        let changed = UnitsChanged {
            second: true,
            minute: true,
            ..UnitsChanged::default()
        };
        face.on_tick(tick(at(0, 0, 0, 6, Weekday::Tue), changed));

        assert_eq!(face.date_text(), before);
    }

    #[test]
    fn test_day_bit_updates_date_text() {
        let mut face = face();
        face.date.clear_dirty();

        face.on_tick(tick(at(0, 0, 0, 6, Weekday::Tue), UnitsChanged::all()));

        assert_eq!(face.date_text(), "TUE 06");
        assert!(face.date.is_dirty());
    }

    #[test]
    fn test_apply_settings_switches_tick_granularity() {
        let mut face = face();
        let mut ticker = TickService::new();
        let mut weather = WeatherService::new();
        let mut vibration = VibrationService::new();

        face.apply_settings(
            Settings::default(),
            &mut ticker,
            &mut weather,
            &mut vibration,
        );
        let seconds_handle = ticker.handle().unwrap();
        assert_eq!(ticker.granularity(), Some(TickGranularity::Second));

        let settings = Settings {
            show_second_hand: false,
            ..Settings::default()
        };
        face.apply_settings(settings, &mut ticker, &mut weather, &mut vibration);

        // A genuinely new subscription, not just a hidden hand
        assert_ne!(ticker.handle().unwrap(), seconds_handle);
        assert_eq!(ticker.granularity(), Some(TickGranularity::Minute));
    }

    #[test]
    fn test_weather_subscription_follows_setting() {
        let mut face = face();
        let mut ticker = TickService::new();
        let mut weather = WeatherService::new();
        let mut vibration = VibrationService::new();

        face.apply_settings(
            Settings::default(),
            &mut ticker,
            &mut weather,
            &mut vibration,
        );
        assert!(weather.handle().is_some());
        assert!(face.weather.visible);
        assert_eq!(face.weather_text(), "??");

        weather.report(21);
        let (sample, status) = weather.poll().unwrap();
        face.on_weather(sample, status);
        assert_eq!(face.weather_text(), "21°");

        let disabled = Settings {
            weather_enabled: false,
            ..Settings::default()
        };
        face.apply_settings(disabled, &mut ticker, &mut weather, &mut vibration);

        assert!(weather.handle().is_none());
        assert!(!face.weather.visible);
        assert_eq!(face.weather_text(), "");

        // Re-enable: exactly one subscription, and the retained sample is
        // treated as stale until the next report
        face.apply_settings(
            Settings::default(),
            &mut ticker,
            &mut weather,
            &mut vibration,
        );
        assert!(weather.handle().is_some());
        assert_eq!(face.weather_text(), "??");
    }

    #[test]
    fn test_weather_event_updates_text_only() {
        let mut face = face();
        face.hands.clear_dirty();
        face.weather.clear_dirty();

        face.on_weather(
            Some(WeatherSample { temperature_c: 7 }),
            WeatherStatus::Available,
        );

        assert_eq!(face.weather_text(), "7°");
        assert!(face.weather.is_dirty());
        assert!(!face.hands.is_dirty());
    }

    #[test]
    fn test_weather_failure_text() {
        let mut face = face();
        face.on_weather(None, WeatherStatus::Unavailable);
        assert_eq!(face.weather_text(), "--");
    }

    #[test]
    fn test_connection_change_dirties_hands_only() {
        let mut face = face();
        face.hands.clear_dirty();
        face.date.clear_dirty();
        face.weather.clear_dirty();

        face.on_connection(false);

        assert!(!face.connected());
        assert!(face.hands.is_dirty());
        assert!(!face.date.is_dirty());
        assert!(!face.weather.is_dirty());
    }

    #[test]
    fn test_quiet_surface_absent_without_platform_support() {
        let no_quiet = PlatformCapabilities {
            quiet_time: false,
            ..caps()
        };
        let face = FaceInstance::new(
            no_quiet,
            Rect::from_w_h(360.0, 360.0),
            Settings::default(),
            at(10, 30, 0, 5, Weekday::Mon),
            true,
        );
        assert!(!face.quiet.visible);
    }

    #[test]
    fn test_apply_settings_resyncs_date() {
        let mut face = face();
        // Simulate a stale label from before a settings change
        face.date_text = "XXX 00".to_string();

        let mut ticker = TickService::new();
        let mut weather = WeatherService::new();
        let mut vibration = VibrationService::new();
        face.apply_settings(
            Settings::default(),
            &mut ticker,
            &mut weather,
            &mut vibration,
        );

        assert_eq!(face.date_text(), "MON 05");
        assert!(face.date.is_dirty());
        assert!(face.hands.is_dirty());
    }
}
