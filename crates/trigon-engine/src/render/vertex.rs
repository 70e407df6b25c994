//! GPU vertex layouts and CPU → GPU packing.

use bytemuck::{Pod, Zeroable};
use trigon_geom::{Rgb, Shape};

/// Position + color. Matches `shaders/shape.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct ColorVertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // pos
        1 => Float32x3  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Position + color + texture coordinate. Matches `shaders/textured.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct TexturedVertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl TexturedVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // pos
        1 => Float32x3, // color
        2 => Float32x2  // uv
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TexturedVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// sRGB transfer function, decoding direction.
#[inline]
pub(crate) fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn encode_color(color: Rgb, srgb_target: bool) -> [f32; 3] {
    if srgb_target {
        [srgb_to_linear(color.r), srgb_to_linear(color.g), srgb_to_linear(color.b)]
    } else {
        color.to_array()
    }
}

pub(super) fn pack_color(shape: &Shape, srgb_target: bool) -> Vec<ColorVertex> {
    shape
        .vertices()
        .iter()
        .map(|v| ColorVertex {
            pos: v.pos().to_array(),
            color: encode_color(v.color(), srgb_target),
        })
        .collect()
}

/// Vertices without a texture coordinate sample the texture origin.
pub(super) fn pack_textured(shape: &Shape, srgb_target: bool) -> Vec<TexturedVertex> {
    shape
        .vertices()
        .iter()
        .map(|v| TexturedVertex {
            pos: v.pos().to_array(),
            color: encode_color(v.color(), srgb_target),
            uv: v.tex().map_or([0.0, 0.0], |t| t.to_array()),
        })
        .collect()
}
