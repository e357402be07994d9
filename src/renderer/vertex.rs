//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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
    pub const SKY_TOP: [f32; 4] = [0.494, 0.851, 1.0, 1.0];
    pub const SKY_BOTTOM: [f32; 4] = [0.608, 0.820, 1.0, 1.0];
    /// Back parallax layer: faint distant hills
    pub const HILLS: [f32; 4] = [0.498, 0.749, 1.0, 0.25];
    /// Mid parallax layer: soft blue shapes
    pub const MID_SHAPES: [f32; 4] = [0.227, 0.663, 1.0, 0.19];
    /// Front parallax layer: near-transparent white strips
    pub const FRONT_STRIPS: [f32; 4] = [1.0, 1.0, 1.0, 0.03];
    pub const GROUND: [f32; 4] = [0.176, 0.184, 0.212, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.169, 0.169, 0.169, 1.0];
    pub const COIN: [f32; 4] = [1.0, 0.820, 0.4, 1.0];
    pub const COIN_SHINE: [f32; 4] = [1.0, 1.0, 1.0, 0.35];
}
