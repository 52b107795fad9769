//! Native window client for the movable dot
//!
//! winit owns the run loop, wgpu draws the frames recorded by
//! [`dot_core::DotController`].

mod app;
mod camera;
pub mod error;
mod frame;
mod input;
mod mesh;
mod renderer;
mod timing;

pub use app::run;
pub use error::ClientError;
