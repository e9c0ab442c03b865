//! Overlay shape renderers.

mod common;

pub mod rounded_rect;
pub mod text;

pub use rounded_rect::RoundedRectRenderer;
pub use text::TextRenderer;
