//! Overlay color model.
//!
//! The 2D overlay blends with premultiplied alpha; surface colors live in
//! `swell_kernel::Rgb` and are converted here when drawn as UI swatches.

pub mod color;

pub use color::Color;
