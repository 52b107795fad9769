use crate::color::Color;

/// Tuning parameters for the movable dot
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const SCREEN_TITLE: &'static str = "Movable Dot";

    // Dot
    pub const DOT_RADIUS: f32 = 10.0;
    pub const DOT_SPEED: f32 = 5.0; // units per tick, not per second

    // Colors
    pub const BACKGROUND: Color = Color::DARK_MIDNIGHT_BLUE;
    pub const DOT_COLOR: Color = Color::AMBER;

    // Timing
    pub const UPDATE_RATE: f32 = 1.0 / 60.0; // seconds per tick
    pub const MIN_UPDATE_RATE: f32 = 0.001;
    pub const MAX_UPDATE_RATE: f32 = 5.0;
}
