pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::camera::Camera;
use crate::error::ClientError;
use crate::frame::Frame;
use crate::mesh::{create_circle, Mesh};
use resources::GameBuffers;
use wgpu::*;
use winit::window::Window;

const CIRCLE_SEGMENTS: u16 = 48;
const INITIAL_INSTANCES: usize = 16;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),

    pub pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub circle: Mesh,

    /// Colors must be linearized before reaching an sRGB surface
    pub linear_colors: bool,
}

impl Renderer {
    /// Set up the GPU for a window showing `width` x `height` screen units
    pub async fn new(window: Arc<Window>, width: f32, height: f32) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(width, height);

        let buffers = resources::create_buffers(&ctx.device, &camera, INITIAL_INSTANCES);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let (vertices, indices) = create_circle(CIRCLE_SEGMENTS);
        let circle = Mesh::new(&ctx.device, &vertices, &indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let linear_colors = ctx.config.format.is_srgb();
        tracing::debug!(format = ?ctx.config.format, size = ?ctx.size, "surface configured");

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            pipeline: pipes.pipeline,
            camera_bind_group,
            buffers,
            circle,
            linear_colors,
        })
    }

    /// Match the surface to the window's physical size.
    /// The camera is in screen units so it stays as is.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        tracing::debug!(width, height, "surface resized");
    }

    /// Reapply the current surface configuration after it was lost
    pub fn reconfigure(&mut self) {
        let (width, height) = self.size;
        self.resize(width, height);
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<(), ClientError> {
        draw::draw_frame(self, frame)
    }
}
