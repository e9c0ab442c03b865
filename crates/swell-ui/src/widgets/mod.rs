//! Panel widgets.

pub mod color_field;
pub mod container;
pub mod flex;
pub mod folder;
pub mod labeled;
pub mod slider;
pub mod text;
pub mod toggle;
