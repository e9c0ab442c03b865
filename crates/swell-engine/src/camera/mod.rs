//! Cameras for the 3D scene.

mod orbit;

pub use orbit::OrbitCamera;
