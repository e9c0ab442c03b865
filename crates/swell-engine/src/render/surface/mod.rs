//! World-space surface rendering.
//!
//! Draws uploaded meshes through the swell shading kernel on the GPU: the
//! vertex stage displaces along local +Z and the fragment stage picks a color
//! mode per draw. Depth-tested against the frame's depth target.

mod gpu_mesh;
mod renderer;
mod uniforms;

pub use gpu_mesh::GpuMesh;
pub use renderer::{DrawStyle, SurfaceDraw, SurfaceRenderer};
pub use uniforms::SurfaceUniforms;
