//! Literal geometry shared by the demos.

use trigon_geom::{Rgb, Shape, Vec2, Vec3, Vertex};

/// Red/green/blue triangle pointing up, at depth `z`.
pub fn rgb_triangle(z: f32) -> Shape {
    Shape::triangle([
        Vertex::new(Vec3::new(0.5, -0.5, z), Rgb::RED),
        Vertex::new(Vec3::new(-0.5, -0.5, z), Rgb::GREEN),
        Vertex::new(Vec3::new(0.0, 0.5, z), Rgb::BLUE),
    ])
}

/// Axis-aligned unit quad centered on the origin, texture corners matching
/// its own corners.
pub fn textured_quad() -> Shape {
    Shape::rectangle([
        Vertex::textured(Vec3::new(0.5, 0.5, 0.0), Rgb::RED, Vec2::new(1.0, 1.0)),
        Vertex::textured(Vec3::new(0.5, -0.5, 0.0), Rgb::GREEN, Vec2::new(1.0, 0.0)),
        Vertex::textured(Vec3::new(-0.5, -0.5, 0.0), Rgb::BLUE, Vec2::new(0.0, 0.0)),
        Vertex::textured(Vec3::new(-0.5, 0.5, 0.0), Rgb::new(0.5, 0.5, 1.0), Vec2::new(0.0, 1.0)),
    ])
}
