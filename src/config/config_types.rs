// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct OscConfig {
    pub rx_port: u16,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub settings_file: String,
}

/// Capabilities of the emulated watch platform, resolved once at startup
/// and threaded through construction. Renderers branch on these at runtime
/// instead of using conditional compilation.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlatformCapabilities {
    /// Round display (ellipse projection) vs. rectangular (rounded-rect).
    pub round_screen: bool,
    /// Color display; monochrome platforms draw all ticks in one tone.
    pub color_screen: bool,
    /// Whether the platform exposes a quiet-time (do-not-disturb) state.
    pub quiet_time: bool,
    /// Whether the platform exposes a health API.
    pub health: bool,
    /// Corner radius used for the rounded-rect projection, in pixels.
    pub corner_radius: f32,
}
