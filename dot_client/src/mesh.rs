//! Mesh generation for the dot
//!
//! Only one mesh is needed: a unit circle, scaled per instance

use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Generate vertices and indices for a filled unit circle.
/// Vertex 0 is the center, followed by `segments` rim vertices.
pub fn create_circle(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity(segments as usize + 1);
    let mut indices = Vec::with_capacity(segments as usize * 3);

    vertices.push(Vertex {
        position: [0.0, 0.0, 0.0],
    });
    for i in 0..segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [angle.cos(), angle.sin(), 0.0],
        });
    }

    // Counter-clockwise fan around the center
    for i in 1..=segments {
        let next = if i == segments { 1 } else { i + 1 };
        indices.extend_from_slice(&[0, i, next]);
    }

    (vertices, indices)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Circle Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Circle Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_layout() {
        let (vertices, indices) = create_circle(32);
        assert_eq!(vertices.len(), 33);
        assert_eq!(indices.len(), 32 * 3);
        assert_eq!(vertices[0].position, [0.0, 0.0, 0.0]);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn test_rim_is_unit_radius() {
        let (vertices, _) = create_circle(16);
        for v in &vertices[1..] {
            let [x, y, _] = v.position;
            assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_fan_closes_and_winds_ccw() {
        let (vertices, indices) = create_circle(8);
        assert_eq!(&indices[indices.len() - 3..], &[0, 8, 1]);
        for tri in indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| vertices[i as usize].position);
            let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross > 0.0);
        }
    }

    #[test]
    fn test_minimum_segments() {
        let (vertices, indices) = create_circle(1);
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 9);
    }
}
