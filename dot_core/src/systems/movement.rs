use crate::{Config, Dot};

/// Move the dot one fixed step along its velocity, then keep it on screen
pub fn move_dot(dot: &mut Dot, config: &Config) {
    dot.pos += dot.vel;

    // Clamp to screen bounds
    dot.pos = config.clamp_position(dot.pos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_move_dot_steps_by_velocity() {
        let config = Config::new();
        let mut dot = Dot::new(Vec2::new(400.0, 300.0));
        dot.vel = Vec2::new(5.0, -5.0);
        move_dot(&mut dot, &config);
        assert_eq!(dot.pos, Vec2::new(405.0, 295.0));
    }

    #[test]
    fn test_move_dot_stops_at_edges() {
        let config = Config::new();
        let mut dot = Dot::new(Vec2::new(12.0, 588.0));
        dot.vel = Vec2::new(-5.0, 5.0);
        move_dot(&mut dot, &config);
        assert_eq!(dot.pos, Vec2::new(10.0, 590.0));
        // Velocity is kept; the dot just pushes against the wall
        assert_eq!(dot.vel, Vec2::new(-5.0, 5.0));
    }
}
