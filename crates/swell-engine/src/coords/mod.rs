//! Coordinate types shared by the overlay renderers and the UI.
//!
//! Overlay space is logical pixels, origin top-left, +X right, +Y down.
//! The 3D surface pass works in world space instead and never sees these.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
