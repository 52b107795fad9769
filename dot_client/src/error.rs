use dot_core::ConfigError;
use thiserror::Error;

/// Everything that can stop the client from showing the dot
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("update rate cannot be scheduled: {0}")]
    UpdateRate(#[from] std::time::TryFromFloatSecsError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter found")]
    NoAdapter,
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface has no supported formats")]
    NoSurfaceFormat,
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
