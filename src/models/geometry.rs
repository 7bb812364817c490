// src/models/geometry.rs
// Polar projection onto the display boundary.
//
// Every drawing routine maps a clock angle to a point on the face outline
// through these functions. Angles are expressed as a fraction of a full
// turn in [0, 1), with 0 at 12 o'clock and increasing clockwise.

use nannou::prelude::*;
use std::f32::consts::TAU;

/// Outline the projection targets: a full ellipse inscribed in the bounding
/// rect on round displays, or the rect's rounded-corner boundary on
/// rectangular ones. Picked once at startup from the platform capabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayShape {
    Ellipse,
    RoundedRect { corner_radius: f32 },
}

/// Inset `bounds` uniformly by `margin` pixels on all sides. Negative
/// margins expand instead; the tick ring relies on that to reach past the
/// visible rectangle on rectangular displays.
pub fn crop(bounds: Rect, margin: f32) -> Rect {
    Rect::from_x_y_w_h(
        bounds.x(),
        bounds.y(),
        bounds.w() - 2.0 * margin,
        bounds.h() - 2.0 * margin,
    )
}

/// Point where a ray from the center of `bounds` at the given clock angle
/// meets the shape's boundary. The ellipse is scaled independently in x and
/// y to fill the rect, so non-square bounds give a true ellipse rather than
/// a uniform-radius circle.
pub fn point_on_boundary(shape: &DisplayShape, bounds: Rect, fraction: f32) -> Point2 {
    let angle = fraction * TAU;
    // 12 o'clock is up (+y), clockwise sweep
    let dir = vec2(angle.sin(), angle.cos());

    match shape {
        DisplayShape::Ellipse => {
            bounds.xy() + vec2(dir.x * bounds.w() / 2.0, dir.y * bounds.h() / 2.0)
        }
        DisplayShape::RoundedRect { corner_radius } => {
            bounds.xy() + rounded_rect_offset(bounds.w() / 2.0, bounds.h() / 2.0, *corner_radius, dir)
        }
    }
}

fn rounded_rect_offset(half_w: f32, half_h: f32, radius: f32, dir: Vec2) -> Vec2 {
    // Ray-perimeter intersection with the plain rectangle first
    let tx = if dir.x.abs() > f32::EPSILON {
        half_w / dir.x.abs()
    } else {
        f32::INFINITY
    };
    let ty = if dir.y.abs() > f32::EPSILON {
        half_h / dir.y.abs()
    } else {
        f32::INFINITY
    };
    let point = dir * tx.min(ty);

    // Inside a corner region, pull the point onto the corner arc
    let radius = radius.min(half_w.abs()).min(half_h.abs());
    if radius > 0.0 && point.x.abs() > half_w - radius && point.y.abs() > half_h - radius {
        let corner = vec2(
            point.x.signum() * (half_w - radius),
            point.y.signum() * (half_h - radius),
        );
        let out = point - corner;
        if out.length() > 0.0 {
            return corner + out.normalize() * radius;
        }
    }

    point
}
