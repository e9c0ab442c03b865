//! GPU device + surface management.
//!
//! Creates the wgpu Instance/Adapter/Device/Queue, configures the surface,
//! keeps a depth target matching the surface size, and hands out per-frame
//! encoders.

mod depth;
mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use depth::{DepthTarget, DEPTH_FORMAT};
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
