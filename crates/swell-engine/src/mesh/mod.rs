//! CPU-side mesh generation.
//!
//! Meshes are indexed triangle lists with an interleaved position/normal/uv
//! vertex and a derived list of unique edges for wireframe drawing.

mod data;
mod primitives;

pub use data::{MeshData, MeshVertex};
pub use primitives::{plane, uv_sphere};
