// src/draw/tick_draw.rs
// The 12-marker tick ring.
//
// Geometry is computed by a pure function and stroked by a separate pass,
// so the marker layout is testable without a drawing context.

use nannou::prelude::*;

use crate::draw::Palette;
use crate::models::{crop, point_on_boundary, DisplayShape};

pub const TICK_STROKE_WEIGHT: f32 = 2.0;

/// Inner ring every marker ends on.
const INNER_MARGIN: f32 = 25.0;
/// Deeper outer inset for the 12 and 6 o'clock markers.
const MAJOR_OUTER_MARGIN: f32 = 12.0;
/// On rectangular displays the ring is pushed past the visible rectangle so
/// the corner markers land in the corners.
const RECT_EXPAND_MARGIN: f32 = -15.0;
/// Horizontal offset of the doubled 12 o'clock marker.
const TWELVE_OFFSET: f32 = 4.0;

#[derive(Debug, Clone, Copy)]
pub struct TickMark {
    pub index: usize,
    pub from: Point2,
    pub to: Point2,
}

impl TickMark {
    /// Bright markers at 12, 3, 6, and 9; the rest use the dim tone on
    /// color displays.
    pub fn is_bright(&self) -> bool {
        self.index % 3 == 0
    }
}

/// Ring bounds for a given surface: expanded past the surface on
/// rectangular displays, the surface itself on round ones.
pub fn ring_bounds(shape: &DisplayShape, bounds: Rect) -> Rect {
    match shape {
        DisplayShape::Ellipse => bounds,
        DisplayShape::RoundedRect { .. } => crop(bounds, RECT_EXPAND_MARGIN),
    }
}

/// Marker segments for all 12 hour positions. Index 0 yields TWO parallel
/// segments offset ±4 px in x, the deliberately thicker "12" indicator.
pub fn tick_marks(shape: &DisplayShape, bounds: Rect) -> Vec<TickMark> {
    let major_outer = crop(bounds, MAJOR_OUTER_MARGIN);
    let inner = crop(bounds, INNER_MARGIN);

    let mut marks = Vec::with_capacity(13);
    for index in 0..12 {
        let fraction = index as f32 / 12.0;
        let outer = if index % 6 == 0 { major_outer } else { bounds };

        let from = point_on_boundary(shape, outer, fraction);
        let to = point_on_boundary(shape, inner, fraction);

        if index == 0 {
            marks.push(TickMark {
                index,
                from: from + vec2(-TWELVE_OFFSET, 0.0),
                to: to + vec2(-TWELVE_OFFSET, 0.0),
            });
            marks.push(TickMark {
                index,
                from: from + vec2(TWELVE_OFFSET, 0.0),
                to: to + vec2(TWELVE_OFFSET, 0.0),
            });
        } else {
            marks.push(TickMark { index, from, to });
        }
    }

    marks
}

pub fn draw_ticks(draw: &Draw, shape: &DisplayShape, bounds: Rect, palette: &Palette) {
    let ring = ring_bounds(shape, bounds);

    for mark in tick_marks(shape, ring) {
        let color = if mark.is_bright() {
            palette.foreground
        } else {
            palette.dim
        };

        draw.line()
            .points(mark.from, mark.to)
            .color(color)
            .stroke_weight(TICK_STROKE_WEIGHT);
    }
}
