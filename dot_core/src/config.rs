use glam::Vec2;
use thiserror::Error;

use crate::color::Color;
use crate::params::Params;

/// Reasons a [`Config`] cannot drive a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("screen size must be positive and finite, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },
    #[error("dot radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("dot speed must be positive and finite, got {0}")]
    InvalidSpeed(f32),
    #[error("a dot of radius {radius} does not fit a {width}x{height} screen")]
    DotTooLarge { radius: f32, width: f32, height: f32 },
    #[error("update rate must be between {min} and {max} seconds, got {rate}")]
    InvalidUpdateRate { rate: f32, min: f32, max: f32 },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub title: String,
    pub dot_radius: f32,
    pub dot_speed: f32,
    pub update_rate: f32,
    pub background: Color,
    pub dot_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            title: Params::SCREEN_TITLE.to_string(),
            dot_radius: Params::DOT_RADIUS,
            dot_speed: Params::DOT_SPEED,
            update_rate: Params::UPDATE_RATE,
            background: Params::BACKGROUND,
            dot_color: Params::DOT_COLOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen size as a vector
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Exact center of the screen
    pub fn center(&self) -> Vec2 {
        self.screen_size() / 2.0
    }

    /// Clamp a dot position so the whole dot stays on screen.
    /// Each axis is clamped independently.
    pub fn clamp_position(&self, pos: Vec2) -> Vec2 {
        let r = self.dot_radius;
        Vec2::new(
            pos.x.clamp(r, self.screen_width - r),
            pos.y.clamp(r, self.screen_height - r),
        )
    }

    /// Check that the config describes a screen the dot can live on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.screen_width, self.screen_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::InvalidScreen {
                width: w,
                height: h,
            });
        }
        if !(self.dot_radius.is_finite() && self.dot_radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.dot_radius));
        }
        if !(self.dot_speed.is_finite() && self.dot_speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.dot_speed));
        }
        // f32::clamp panics when min > max
        if 2.0 * self.dot_radius > w.min(h) {
            return Err(ConfigError::DotTooLarge {
                radius: self.dot_radius,
                width: w,
                height: h,
            });
        }
        // NaN fails the range check too
        let rates = Params::MIN_UPDATE_RATE..=Params::MAX_UPDATE_RATE;
        if !rates.contains(&self.update_rate) {
            return Err(ConfigError::InvalidUpdateRate {
                rate: self.update_rate,
                min: Params::MIN_UPDATE_RATE,
                max: Params::MAX_UPDATE_RATE,
            });
        }
        Ok(())
    }
}
