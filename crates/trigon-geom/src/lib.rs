//! Shape transform pipeline.
//!
//! Shapes are small, fixed-length vertex lists (triangle or rectangle) whose
//! positions are updated in place each frame by composing 2D affine
//! transforms. Everything here is plain CPU math; uploading the result is the
//! renderer's job.
//!
//! Coordinate conventions:
//! - vertex positions are in normalized device coordinates (+X right, +Y up)
//! - pointer positions handed to [`angle::pointer_angle`] are in window
//!   pixels (origin top-left, +Y down)

pub mod angle;
pub mod mat3;
pub mod shape;
pub mod vec;
pub mod vertex;

pub use angle::{normalize_angle, pointer_angle, POINTER_EPSILON};
pub use mat3::Mat3;
pub use shape::{Shape, ShapeKind};
pub use vec::{Rgb, Vec2, Vec3};
pub use vertex::Vertex;
