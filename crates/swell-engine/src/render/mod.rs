//! GPU rendering subsystem.
//!
//! Each renderer owns its pipelines and buffers and creates them lazily on
//! first use, rebuilding when the surface format changes.
//!
//! - `surface` draws the displaced meshes in world space with depth testing.
//! - `shapes` draws the 2D overlay; geometry is in logical pixels (top-left
//!   origin, +Y down) and converted to NDC with a viewport uniform.

pub(crate) mod ctx;
pub mod shapes;
pub mod surface;

pub use ctx::{RenderCtx, RenderTarget};
