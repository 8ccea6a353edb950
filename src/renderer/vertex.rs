//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA color, components in `[0, 1]`
pub type Color = [f32; 4];

/// Corner of a flat-colored triangle.
///
/// `DrawList` fills `position` in playfield pixels; the render state rewrites
/// it to clip space just before upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    /// Buffer layout matching `VertexInput` in shader.wgsl
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &Self::ATTRIBUTES,
    };

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Opaque color from 8-bit channels
pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::{Color, rgb8};

    pub const BACKGROUND: Color = rgb8(0, 0, 0);
    pub const PLAYER: Color = rgb8(0, 100, 255);
    pub const OBSTACLE: Color = rgb8(200, 0, 0);
    pub const TEXT: Color = rgb8(255, 255, 255);
    pub const GAME_OVER: Color = rgb8(200, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        assert_eq!(Vertex::LAYOUT.array_stride, 24);
        assert_eq!(Vertex::LAYOUT.attributes[1].offset, 8);
    }

    #[test]
    fn test_rgb8_is_opaque_and_normalized() {
        assert_eq!(rgb8(255, 0, 51), [1.0, 0.0, 0.2, 1.0]);
        assert_eq!(colors::PLAYER[3], 1.0);
    }
}
