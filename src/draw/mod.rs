// src/draw/mod.rs
// Stroke/fill styling shared by the face renderers

pub mod hand_draw;
pub mod text_draw;
pub mod tick_draw;

pub use hand_draw::{draw_hands, hand_lines, hub, hour_fraction, minute_fraction, second_fraction};
pub use tick_draw::{draw_ticks, ring_bounds, tick_marks};

use nannou::prelude::*;

/// The face's working colors, resolved once per settings cycle so that an
/// invert-colors flip reaches every layer on the same redraw. Monochrome
/// platforms collapse the accent and dim tones into the foreground, which
/// is exactly the single-color tick ring and second hand they render.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub foreground: Rgb,
    pub background: Rgb,
    /// Second-hand color.
    pub accent: Rgb,
    /// Off-hour tick markers.
    pub dim: Rgb,
}

impl Palette {
    pub fn resolve(color_screen: bool, invert: bool) -> Self {
        let (foreground, background, dim) = if invert {
            (rgb(0.0, 0.0, 0.0), rgb(1.0, 1.0, 1.0), rgb(0.65, 0.65, 0.65))
        } else {
            (rgb(1.0, 1.0, 1.0), rgb(0.0, 0.0, 0.0), rgb(0.35, 0.35, 0.35))
        };

        if color_screen {
            Self {
                foreground,
                background,
                accent: rgb(0.9, 0.12, 0.12),
                dim,
            }
        } else {
            Self {
                foreground,
                background,
                accent: foreground,
                dim: foreground,
            }
        }
    }
}
