// src/draw/text_draw.rs
// Auxiliary text surfaces: date, weather, quiet-time glyph

use nannou::prelude::*;

use crate::draw::Palette;

const DATE_FONT_SIZE: u32 = 18;
const WEATHER_FONT_SIZE: u32 = 16;
const QUIET_FONT_SIZE: u32 = 12;

pub fn draw_date(draw: &Draw, bounds: Rect, text: &str, palette: &Palette) {
    draw.text(text)
        .x_y(bounds.x(), bounds.y())
        .w_h(bounds.w(), bounds.h())
        .font_size(DATE_FONT_SIZE)
        .color(palette.foreground);
}

pub fn draw_weather(draw: &Draw, bounds: Rect, text: &str, palette: &Palette) {
    draw.text(text)
        .x_y(bounds.x(), bounds.y())
        .w_h(bounds.w(), bounds.h())
        .font_size(WEATHER_FONT_SIZE)
        .color(palette.foreground);
}

pub fn draw_quiet_glyph(draw: &Draw, bounds: Rect, palette: &Palette) {
    draw.text("QT")
        .x_y(bounds.x(), bounds.y())
        .w_h(bounds.w(), bounds.h())
        .font_size(QUIET_FONT_SIZE)
        .color(palette.foreground);
}
