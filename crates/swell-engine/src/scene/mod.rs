//! Overlay draw stream.
//!
//! Widgets record renderer-agnostic commands into a `DrawList`; the overlay
//! renderers consume it back-to-front. Ordering is `ZIndex` first, insertion
//! order second, so painters can interleave layers without sorting themselves.

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::Border;
pub use shapes::rounded_rect::RoundedRectCmd;
pub use shapes::text::TextCmd;
pub use z_index::ZIndex;
