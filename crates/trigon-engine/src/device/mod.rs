//! GPU device + surface management.
//!
//! Responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue for the window
//! - creating & configuring the Surface (swapchain), including on resize
//! - acquiring frames and providing encoders/views for rendering

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::{AdapterSummary, Gpu};
pub use init::GpuInit;
