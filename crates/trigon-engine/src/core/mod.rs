//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the demos:
//! an [`App`] receives one init call with GPU access, raw window events, and
//! one [`FrameCtx`] per redraw.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
