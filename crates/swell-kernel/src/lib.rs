//! Shading kernel for the **swell** undulating-surface demo.
//!
//! The kernel is a pair of pure functions evaluated per vertex and per pixel:
//!
//! - [`vertex_stage`] displaces a local-space position along +Z by two
//!   independent sine waves (one per axis).
//! - [`fragment_stage`] produces an RGBA color from the surface basis and the
//!   current [`FragmentMode`].
//!
//! The WGSL surface shader in `swell-engine` mirrors these formulas exactly;
//! this crate is the reference they are tested against.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`uniforms`] | `Axes`, `VertexUniforms`, `SurfaceColor`, `Light` |
//! | [`color`] | `Rgb`, `ColorParseError` |
//! | [`vertex`] | displacement, its gradient, displaced normals, the vertex stage |
//! | [`fragment`] | `FragmentMode`, `SurfaceSample`, the fragment stage |
//! | [`params`] | `ShadingParams` uniform block and `ParamEvent` edits |
//!
//! # Quick start
//!
//! ```rust
//! use swell_kernel::{vertex_stage, Axes, VertexUniforms};
//!
//! let uniforms = VertexUniforms {
//!     frequency: Axes::new(20.0, 0.2),
//!     amplitude: Axes::new(0.3, 0.1),
//!     time: 0.0,
//! };
//! let p = vertex_stage([1.0, 0.0, 0.0], &uniforms);
//! assert!((p[2] - 0.2739).abs() < 1e-3);
//! ```

pub mod color;
pub mod fragment;
pub mod params;
pub mod uniforms;
pub mod vertex;

pub use color::{ColorParseError, Rgb};
pub use fragment::{fragment_stage, ripple, FragmentMode, SurfaceSample};
pub use params::{Axis, GroundMode, ParamEvent, ShadingParams, Vec3Component};
pub use uniforms::{Axes, Light, SurfaceColor, VertexUniforms};
pub use vertex::{displaced_normal, displacement, displacement_gradient, vertex_stage};
