//! Trigon engine crate.
//!
//! Owns the platform + GPU runtime pieces the demos run on: one winit window,
//! its wgpu surface, per-window input and timing, and the shape renderers
//! that upload `trigon_geom` shapes every frame.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
