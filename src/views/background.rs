// src/views/background.rs
//
// A simple module to manage the window background color

use nannou::prelude::*;

use crate::draw::Palette;

pub struct BackgroundManager {
    current_color: Rgb,
}

impl Default for BackgroundManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundManager {
    pub fn new() -> Self {
        Self {
            current_color: rgb(0.0, 0.0, 0.0),
        }
    }

    /// Re-applied whenever the palette changes so an invert-colors flip
    /// reaches the window background on the same cycle as the layers.
    pub fn apply_palette(&mut self, palette: &Palette) {
        self.current_color = palette.background;
    }

    pub fn draw(&self, draw: &Draw) {
        draw.background().color(self.current_color);
    }

    pub fn get_current_color(&self) -> Rgb {
        self.current_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_follows_palette_inversion() {
        let mut background = BackgroundManager::new();
        assert_eq!(background.get_current_color(), rgb(0.0, 0.0, 0.0));

        let inverted = Palette::resolve(true, true);
        background.apply_palette(&inverted);
        assert_eq!(background.get_current_color(), inverted.background);
        assert_eq!(background.get_current_color(), rgb(1.0, 1.0, 1.0));

        let normal = Palette::resolve(true, false);
        background.apply_palette(&normal);
        assert_eq!(background.get_current_color(), rgb(0.0, 0.0, 0.0));
    }
}
