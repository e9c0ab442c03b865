//! Input subsystem.
//!
//! The public API does not expose winit types; `platform::winit` translates
//! window events into `InputEvent`s which `InputState` folds into the current
//! state plus a per-frame `InputFrame`.

mod frame;
pub mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};
