use glam::Vec2;

/// Dot component - the single movable circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub pos: Vec2,
    pub vel: Vec2, // each axis is -speed, 0 or +speed
}

impl Dot {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }
}

/// Keys the dot reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Escape,
    /// Any key without a binding
    Other,
}

impl Key {
    pub fn is_vertical(self) -> bool {
        matches!(self, Key::Up | Key::W | Key::Down | Key::S)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Key::Left | Key::A | Key::Right | Key::D)
    }
}
