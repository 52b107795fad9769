use crate::camera::{Camera, CameraUniform};
use crate::frame::Circle;
use dot_core::Color;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    /// Instance of the unit circle mesh covering `circle`
    pub fn from_circle(circle: &Circle, linear: bool) -> Self {
        Self {
            transform: [
                circle.center.x,
                circle.center.y,
                circle.radius,
                circle.radius,
            ],
            tint: shader_color(circle.color, linear),
        }
    }
}

/// Channel values to hand the GPU. sRGB targets expect linear input.
pub fn shader_color(color: Color, linear: bool) -> [f32; 4] {
    if linear {
        color.to_linear_f32()
    } else {
        color.to_srgba_f32()
    }
}

pub fn clear_color(color: Color, linear: bool) -> wgpu::Color {
    let [r, g, b, a] = shader_color(color, linear);
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub instance_capacity: usize,
}

pub fn create_buffers(device: &Device, camera: &Camera, instance_capacity: usize) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::bytes_of(&camera_uniform),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        instances: create_instance_buffer(device, instance_capacity),
        instance_capacity,
    }
}

pub fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Circle Instance Buffer"),
        size: (capacity.max(1) * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_instance_from_circle() {
        let circle = Circle {
            center: Vec2::new(400.0, 300.0),
            radius: 10.0,
            color: Color::AMBER,
        };
        let instance = InstanceData::from_circle(&circle, false);
        assert_eq!(instance.transform, [400.0, 300.0, 10.0, 10.0]);
        assert_eq!(instance.tint, [1.0, 191.0 / 255.0, 0.0, 1.0]);
    }

    #[test]
    fn test_linear_tint_for_srgb_targets() {
        let tint = shader_color(Color::DARK_MIDNIGHT_BLUE, true);
        assert_eq!(tint, Color::DARK_MIDNIGHT_BLUE.to_linear_f32());
        assert!(tint[2] < 102.0 / 255.0);
    }

    #[test]
    fn test_instance_stride() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 32);
    }

    #[test]
    fn test_clear_color_keeps_alpha() {
        assert_eq!(clear_color(Color::BLACK, true).a, 1.0);
    }
}
