//! Draw commands recorded during one `on_draw`

use dot_core::{Canvas, Color};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// One frame's worth of drawing, replayed by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: Color,
    pub circles: Vec<Circle>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            circles: Vec::new(),
        }
    }
}

impl Canvas for Frame {
    fn clear(&mut self, color: Color) {
        self.background = color;
        self.circles.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.circles.push(Circle {
            center,
            radius,
            color,
        });
    }
}
