//! Simulation core for the movable dot
//!
//! Window-free: a host drives [`DotController`] through the
//! [`WindowHandler`] callbacks and supplies a [`Canvas`] and a [`Host`].

pub mod color;
pub mod components;
pub mod config;
pub mod controller;
pub mod handler;
pub mod params;
pub mod resources;
pub mod systems;

pub use color::*;
pub use components::*;
pub use config::*;
pub use controller::*;
pub use handler::*;
pub use params::*;
pub use resources::*;
