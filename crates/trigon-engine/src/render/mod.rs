//! GPU rendering subsystem.
//!
//! Renderers own their pipelines; `ShapeMesh` owns the buffers of one shape.
//! Each renderer records into its own render pass that loads (does not
//! clear) the frame, so several renderers can draw into one frame in order.
//!
//! Convention:
//! - vertex positions arrive in NDC and pass through the vertex shader as-is
//! - colors are straight sRGB-encoded values, linearized on upload when the
//!   surface format is sRGB

mod common;
mod ctx;
mod mesh;
mod shape;
mod texture;
mod textured;
mod vertex;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{MeshFormat, ShapeMesh};
pub use shape::ShapeRenderer;
pub use texture::Texture;
pub use textured::{DEFAULT_MIX, TexturedShapeRenderer};

pub(crate) use vertex::srgb_to_linear;
