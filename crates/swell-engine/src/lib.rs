//! Swell engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the studio: window loop,
//! input translation, frame timing, the 2D overlay renderers used by the
//! debug panel, and the 3D surface renderer that runs the shading kernel on
//! the GPU.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;

pub mod camera;
pub mod mesh;
