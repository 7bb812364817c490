// src/draw/hand_draw.rs
// Hour, minute, and second hands plus the center hub.
//
// Angle math, line endpoints, and the hub layout are pure functions of the
// cached state; the draw pass only strokes and fills them.

use nannou::prelude::*;

use crate::draw::Palette;
use crate::models::{crop, point_on_boundary, ClockTime, DisplayShape};

pub const HOUR_HAND_MARGIN: f32 = 15.0;
pub const HOUR_HAND_WEIGHT: f32 = 3.0;
pub const MINUTE_HAND_WEIGHT: f32 = 3.0;
pub const SECOND_HAND_WEIGHT: f32 = 1.0;

const HUB_OUTER_RADIUS: f32 = 6.0;
const HUB_INNER_RADIUS: f32 = 3.0;
const HUB_HOLE_RADIUS: f32 = 2.0;

/// The hour hand advances in discrete 10-minute steps: `minute / 10` is
/// truncating integer division, by design. 72 steps cover the dial.
pub fn hour_fraction(hour: u32, minute: u32) -> f32 {
    (((hour % 12) * 6) + minute / 10) as f32 / 72.0
}

pub fn minute_fraction(minute: u32) -> f32 {
    minute as f32 / 60.0
}

pub fn second_fraction(second: u32) -> f32 {
    second as f32 / 60.0
}

#[derive(Debug, Clone, Copy)]
pub struct HandLines {
    pub center: Point2,
    pub hour: Point2,
    pub minute: Point2,
    pub second: Option<Point2>,
}

/// Line endpoints for the current time. The shared origin sits (-1, -1)
/// off the true center to compensate for the even-width stroke bias; the
/// second tip is absent when the second hand is disabled.
pub fn hand_lines(
    shape: &DisplayShape,
    bounds: Rect,
    time: &ClockTime,
    show_seconds: bool,
) -> HandLines {
    let center = bounds.xy() + vec2(-1.0, -1.0);

    let hour = point_on_boundary(
        shape,
        crop(bounds, HOUR_HAND_MARGIN),
        hour_fraction(time.hour, time.minute),
    );
    let minute = point_on_boundary(shape, bounds, minute_fraction(time.minute));
    let second = show_seconds
        .then(|| point_on_boundary(shape, bounds, second_fraction(time.second)));

    HandLines {
        center,
        hour,
        minute,
        second,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hub {
    /// Knob center, shared with the hand origin.
    pub center: Point2,
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// Punched at the exact geometric center while the link is down.
    pub hole: Option<Point2>,
    pub hole_radius: f32,
}

/// The hub doubles as the connection indicator: a lost link punches a
/// small background-colored hole through the knob; reconnecting fills it.
pub fn hub(bounds: Rect, connected: bool) -> Hub {
    Hub {
        center: bounds.xy() + vec2(-1.0, -1.0),
        outer_radius: HUB_OUTER_RADIUS,
        inner_radius: HUB_INNER_RADIUS,
        hole: (!connected).then_some(bounds.xy()),
        hole_radius: HUB_HOLE_RADIUS,
    }
}

pub fn draw_hands(
    draw: &Draw,
    shape: &DisplayShape,
    bounds: Rect,
    time: &ClockTime,
    palette: &Palette,
    show_seconds: bool,
    connected: bool,
) {
    let lines = hand_lines(shape, bounds, time, show_seconds);

    draw.line()
        .points(lines.center, lines.hour)
        .color(palette.foreground)
        .stroke_weight(HOUR_HAND_WEIGHT);
    draw.line()
        .points(lines.center, lines.minute)
        .color(palette.foreground)
        .stroke_weight(MINUTE_HAND_WEIGHT);

    if let Some(second_tip) = lines.second {
        draw.line()
            .points(lines.center, second_tip)
            .color(palette.accent)
            .stroke_weight(SECOND_HAND_WEIGHT);
    }

    // Hub: erase the hand overlap, then the visible knob
    let hub = hub(bounds, connected);
    draw.ellipse()
        .xy(hub.center)
        .radius(hub.outer_radius)
        .color(palette.background);
    draw.ellipse()
        .xy(hub.center)
        .radius(hub.inner_radius)
        .color(palette.foreground);

    if let Some(hole) = hub.hole {
        draw.ellipse()
            .xy(hole)
            .radius(hub.hole_radius)
            .color(palette.background);
    }
}
