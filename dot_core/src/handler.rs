//! Callback surface between a window host and whatever it displays
//!
//! A host owns the run loop and calls into a [`WindowHandler`] from a single
//! thread, one callback at a time.

use glam::Vec2;

use crate::color::Color;
use crate::components::Key;

/// Primitive drawing operations a host provides for one frame
pub trait Canvas {
    /// Fill the whole frame with `color`
    fn clear(&mut self, color: Color);

    /// Draw a filled circle, `center` in screen units with +y up
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Control a handler has over its host
pub trait Host {
    /// Stop the run loop once the current callback returns
    fn exit(&mut self);
}

/// The four events a host dispatches
pub trait WindowHandler {
    fn on_draw(&self, canvas: &mut dyn Canvas);

    /// Called at the host's fixed update rate
    fn on_update(&mut self, delta_time: f32);

    fn on_key_press(&mut self, key: Key, host: &mut dyn Host);

    fn on_key_release(&mut self, key: Key);
}
