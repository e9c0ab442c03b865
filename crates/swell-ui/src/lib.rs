//! Swell UI: the retained widget tree behind the studio's debug panel.
//!
//! Widgets are plain structs implementing [`Widget`]. A frame runs in three
//! passes over the same tree: measure, paint into a `DrawList`, then route
//! the synthesized pointer event. Controls report edits through closures,
//! which the studio wires to a `ParamEvent` channel.
//!
//! ```rust,ignore
//! use swell_ui::prelude::*;
//!
//! let mut root: Element = Folder::new("X", font)
//!     .expanded(true)
//!     .child(Labeled::new("Frequency", font, Slider::new(0.0, 20.0).step(0.1)))
//!     .into();
//! let draw_list = scene.frame_ref(&mut root, area, &UiInput::from_state(&input), scale);
//! ```

pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Widgets, layout types and the engine primitives they take.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        color_field::ColorField,
        container::Container,
        flex::{Align, Column, Row},
        folder::Folder,
        labeled::Labeled,
        slider::Slider,
        text::Text,
        toggle::Toggle,
    };

    pub use swell_engine::coords::{Rect, Vec2};
    pub use swell_engine::paint::Color;
    pub use swell_engine::scene::Border;
    pub use swell_engine::text::FontId;
}
