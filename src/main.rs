// src/main.rs
use nannou::prelude::*;
use rand::Rng;

use facevis::{
    config::{Config, PlatformCapabilities},
    controllers::{FaceCommand, OscController, OscSender},
    draw::Palette,
    models::{ClockTime, ConnectionVibe, WeatherUnit},
    services::{
        ConnectionService, QuietTimeService, SettingsStore, TickService, VibrationService,
        WeatherService,
    },
    views::{BackgroundManager, FaceInstance},
};

struct Model {
    // Core components:
    caps: PlatformCapabilities,
    face: FaceInstance,
    background: BackgroundManager,
    palette: Palette,

    // External collaborators:
    store: SettingsStore,
    ticker: TickService,
    connection: ConnectionService,
    weather: WeatherService,
    vibration: VibrationService,
    quiet: QuietTimeService,

    // Comms components:
    osc_controller: OscController,
    osc_sender: OscSender,

    // Rendering components:
    draw: nannou::Draw,
    random: rand::rngs::ThreadRng,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let caps = config.platform;

    // Load the persisted settings snapshot
    let store = SettingsStore::load(config.resolve_settings_path());
    let settings = store.get();

    // Create OSC controller (the settings/weather/connection channel)
    let osc_controller =
        OscController::new(config.osc.rx_port).expect("Failed to create OSC Controller");
    let osc_sender = OscSender::new(config.osc.rx_port).expect("Failed to create OSC Sender");

    // Create window
    app.new_window()
        .title("facevis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let window_rect = Rect::from_w_h(config.window.width as f32, config.window.height as f32);

    // Wire up the collaborators and take the initial subscriptions
    let mut ticker = TickService::new();
    let mut weather = WeatherService::new();
    let mut vibration = VibrationService::new();
    let connection = ConnectionService::new();

    let mut face = FaceInstance::new(
        caps,
        window_rect,
        settings,
        ClockTime::now(),
        connection.peek(),
    );
    face.apply_settings(settings, &mut ticker, &mut weather, &mut vibration);

    let palette = Palette::resolve(caps.color_screen, settings.invert_colors);
    let mut background = BackgroundManager::new();
    background.apply_palette(&palette);

    Model {
        caps,
        face,
        background,
        palette,

        store,
        ticker,
        connection,
        weather,
        vibration,
        quiet: QuietTimeService::new(),

        osc_controller,
        osc_sender,

        draw: nannou::Draw::new(),
        random: rand::thread_rng(),
    }
}

/// Debug keyboard: every key drives the app through its own OSC channel,
/// the same path the real configuration page uses.
fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::S => {
            let enabled = !model.store.get().show_second_hand;
            model.osc_sender.send_second_hand(enabled);
        }
        Key::I => {
            let enabled = !model.store.get().invert_colors;
            model.osc_sender.send_invert(enabled);
        }
        Key::W => {
            let enabled = !model.store.get().weather_enabled;
            model.osc_sender.send_weather_enabled(enabled);
        }
        Key::U => {
            let next = (model.store.get().weather_unit.as_i32() + 1) % 2;
            model.osc_sender.send_weather_unit(next);
        }
        Key::H => {
            let enabled = !model.store.get().hourly_vibe;
            model.osc_sender.send_hourly_vibe(enabled);
        }
        Key::V => {
            let next = (model.store.get().connection_vibe.as_i32() + 1) % 3;
            model.osc_sender.send_connection_vibe(next);
        }
        Key::C => {
            model
                .osc_sender
                .send_connection_state(!model.connection.peek());
        }
        Key::R => {
            // Simulated fetch result from the phone side
            let temperature_c = model.random.gen_range(-10..=35);
            model.osc_sender.send_weather_report(temperature_c);
        }
        Key::E => {
            model.osc_sender.send_weather_error();
        }
        Key::Q => {
            model.osc_sender.send_quiet_state(!model.quiet.is_active());
        }
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    model.draw.reset();

    // Process the control channel
    model.osc_controller.process_messages();
    launch_commands(model);

    // Timer tick at the subscribed granularity
    if let Some(event) = model.ticker.poll(ClockTime::now()) {
        if let Some(pattern) = model.vibration.on_tick(&event) {
            println!("vibe: {}", pattern);
        }
        model.face.on_tick(event);
    }

    // Connection edge events
    if let Some(connected) = model.connection.poll() {
        println!(
            "bluetooth {}",
            if connected { "connected" } else { "disconnected" }
        );
        if let Some(pattern) = model.vibration.on_connection(connected) {
            println!("vibe: {}", pattern);
        }
        model.face.on_connection(connected);
    }

    // Weather deliveries
    if let Some((sample, status)) = model.weather.poll() {
        model.face.on_weather(sample, status);
    }

    /*********************  Redraw pass **********************/
    model.background.draw(&model.draw);
    model
        .face
        .draw(&model.draw, &model.palette, model.quiet.is_active());
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    model.draw.to_frame(app, &frame).unwrap();
}

// ******************************* Command Launcher *******************************

fn launch_commands(model: &mut Model) {
    let mut settings_changed = false;

    for command in model.osc_controller.take_commands() {
        match command {
            FaceCommand::SetShowSecondHand { enabled } => {
                model.store.update(|s| s.show_second_hand = enabled);
                settings_changed = true;
            }
            FaceCommand::SetHourlyVibe { enabled } => {
                model.store.update(|s| s.hourly_vibe = enabled);
                settings_changed = true;
            }
            FaceCommand::SetConnectionVibe { mode } => {
                model
                    .store
                    .update(|s| s.connection_vibe = ConnectionVibe::from(mode));
                settings_changed = true;
            }
            FaceCommand::SetEnableHealth { enabled } => {
                if model.caps.health {
                    model.store.update(|s| s.enable_health = enabled);
                    settings_changed = true;
                } else {
                    println!("health is not supported on this platform");
                }
            }
            FaceCommand::SetInvertColors { enabled } => {
                model.store.update(|s| s.invert_colors = enabled);
                settings_changed = true;
            }
            FaceCommand::SetWeatherEnabled { enabled } => {
                model.store.update(|s| s.weather_enabled = enabled);
                settings_changed = true;
            }
            FaceCommand::SetWeatherUnit { unit } => {
                model
                    .store
                    .update(|s| s.weather_unit = WeatherUnit::from(unit));
                settings_changed = true;
            }
            FaceCommand::ConnectionState { connected } => {
                model.connection.set_state(connected);
            }
            FaceCommand::WeatherReport { temperature_c } => {
                model.weather.report(temperature_c);
            }
            FaceCommand::WeatherError => {
                model.weather.fail();
            }
            FaceCommand::QuietTimeState { active } => {
                model.quiet.set_active(active);
            }
        }
    }

    // The settings notification carries no payload; re-query the whole
    // snapshot and push it through every consumer at once.
    if settings_changed {
        apply_settings(model);
    }
}

fn apply_settings(model: &mut Model) {
    let settings = model.store.get();
    model.face.apply_settings(
        settings,
        &mut model.ticker,
        &mut model.weather,
        &mut model.vibration,
    );
    model.palette = Palette::resolve(model.caps.color_screen, settings.invert_colors);
    model.background.apply_palette(&model.palette);
}
