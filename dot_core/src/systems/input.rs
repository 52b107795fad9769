use glam::Vec2;

use crate::components::Key;

/// What a key press asks of the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyResponse {
    /// Continue with this velocity
    Velocity(Vec2),
    /// Stop the run loop
    Exit,
}

/// Handle key down: set one velocity axis, or ask to exit
pub fn handle_key_down(key: Key, vel: Vec2, speed: f32) -> KeyResponse {
    let vel = match key {
        Key::Up | Key::W => Vec2::new(vel.x, speed),
        Key::Down | Key::S => Vec2::new(vel.x, -speed),
        Key::Left | Key::A => Vec2::new(-speed, vel.y),
        Key::Right | Key::D => Vec2::new(speed, vel.y),
        Key::Escape => return KeyResponse::Exit,
        Key::Other => vel,
    };
    KeyResponse::Velocity(vel)
}

/// Handle key up: releasing any key on an axis stops that axis
pub fn handle_key_up(key: Key, vel: Vec2) -> Vec2 {
    let mut vel = vel;
    if key.is_vertical() {
        vel.y = 0.0;
    }
    if key.is_horizontal() {
        vel.x = 0.0;
    }
    vel
}
