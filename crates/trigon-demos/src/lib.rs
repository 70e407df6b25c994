//! The trigon demo programs.
//!
//! Each module holds one demo as an `App` implementation plus its default
//! window configuration; the binaries under `src/bin` only wire logging and
//! the runtime around them. Per-frame state lives in the demo structs.

pub mod pointer;
pub mod pointer_spin;
pub mod shapes;
pub mod steer;
pub mod textured_quad;
pub mod triangle;
