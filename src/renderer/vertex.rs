//! Vertex type shared by the rectangle pipeline

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Two triangles covering the box from `min` to `max`
    pub fn quad(min: [f32; 2], max: [f32; 2], color: [f32; 4]) -> [Vertex; 6] {
        let [x0, y0] = min;
        let [x1, y1] = max;
        [
            Vertex::new(x0, y0, color),
            Vertex::new(x1, y0, color),
            Vertex::new(x0, y1, color),
            Vertex::new(x0, y1, color),
            Vertex::new(x1, y0, color),
            Vertex::new(x1, y1, color),
        ]
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const FIELD: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const NET: [f32; 4] = [0.45, 0.45, 0.45, 1.0];
    pub const PADDLE_LEFT: [f32; 4] = [0.3, 0.75, 1.0, 1.0];
    pub const PADDLE_RIGHT: [f32; 4] = [1.0, 0.45, 0.35, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.08, 0.08, 0.1, 1.0];
}
