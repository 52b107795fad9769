use glam::Vec2;

use crate::components::{Dot, Key};
use crate::config::{Config, ConfigError};
use crate::handler::{Canvas, Host, WindowHandler};
use crate::resources::Time;
use crate::systems::{handle_key_down, handle_key_up, move_dot, KeyResponse};

/// Owns the dot and reacts to the host's draw, update and key events
#[derive(Debug, Clone)]
pub struct DotController {
    config: Config,
    dot: Dot,
    time: Time,
}

impl DotController {
    /// Create a controller with the dot resting at the screen center
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let dot = Dot::new(config.center());
        tracing::debug!(pos = ?dot.pos, "dot spawned");
        Ok(Self {
            config,
            dot,
            time: Time::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dot(&self) -> &Dot {
        &self.dot
    }

    pub fn position(&self) -> Vec2 {
        self.dot.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.dot.vel
    }

    pub fn time(&self) -> &Time {
        &self.time
    }
}

impl WindowHandler for DotController {
    fn on_draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear(self.config.background);
        canvas.fill_circle(self.dot.pos, self.config.dot_radius, self.config.dot_color);
    }

    fn on_update(&mut self, delta_time: f32) {
        // Fixed step per tick; delta_time only feeds the clock
        move_dot(&mut self.dot, &self.config);
        self.time.advance(delta_time);
        tracing::trace!(tick = self.time.ticks, pos = ?self.dot.pos, "update");
    }

    fn on_key_press(&mut self, key: Key, host: &mut dyn Host) {
        match handle_key_down(key, self.dot.vel, self.config.dot_speed) {
            KeyResponse::Velocity(vel) => self.dot.vel = vel,
            KeyResponse::Exit => {
                tracing::info!("exit requested");
                host.exit();
            }
        }
    }

    fn on_key_release(&mut self, key: Key) {
        self.dot.vel = handle_key_up(key, self.dot.vel);
    }
}
