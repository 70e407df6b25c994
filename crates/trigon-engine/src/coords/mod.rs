//! Window-space coordinate helpers.
//!
//! Two spaces meet at the window boundary:
//! - logical pixels: origin top-left, +X right, +Y down (pointer input)
//! - normalized device coordinates: origin center, +X right, +Y up, [-1, 1]
//!   (shape vertex positions)

mod viewport;

pub use viewport::Viewport;
