// src/views/surface.rs
//
// Independently dirtyable drawing regions within the face. A surface owns
// nothing but its bounding box and flags; the FaceInstance decides when
// each one needs recomputation.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub bounds: Rect,
    pub visible: bool,
    dirty: bool,
}

impl Surface {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            visible: true,
            dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Child surface placement, derived from the window rect once at startup.
#[derive(Debug, Clone, Copy)]
pub struct FaceLayout {
    /// Full-face bounds shared by the tick ring and the hands.
    pub face: Rect,
    pub date: Rect,
    pub weather: Rect,
    pub quiet: Rect,
}

impl FaceLayout {
    pub fn compute(window: Rect) -> Self {
        let date = Rect::from_x_y_w_h(
            window.x() + window.w() * 0.22,
            window.y(),
            window.w() * 0.3,
            22.0,
        );
        let weather = Rect::from_x_y_w_h(
            window.x(),
            window.y() + window.h() * 0.22,
            window.w() * 0.25,
            20.0,
        );
        let quiet = Rect::from_x_y_w_h(window.left() + 22.0, window.top() - 14.0, 28.0, 16.0);

        Self {
            face: window,
            date,
            weather,
            quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_starts_dirty_and_visible() {
        let surface = Surface::new(Rect::from_w_h(10.0, 10.0));
        assert!(surface.is_dirty());
        assert!(surface.visible);
    }

    #[test]
    fn test_dirty_flag_round_trip() {
        let mut surface = Surface::new(Rect::from_w_h(10.0, 10.0));
        surface.clear_dirty();
        assert!(!surface.is_dirty());
        surface.mark_dirty();
        assert!(surface.is_dirty());
    }

    #[test]
    fn test_layout_children_sit_inside_the_window() {
        let window = Rect::from_w_h(360.0, 360.0);
        let layout = FaceLayout::compute(window);

        assert_eq!(layout.face, window);
        for child in [layout.date, layout.weather, layout.quiet] {
            assert!(child.x() > window.left() && child.x() < window.right());
            assert!(child.y() > window.bottom() && child.y() < window.top());
        }
    }
}
