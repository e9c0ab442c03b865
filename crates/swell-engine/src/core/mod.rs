//! Contract between the runtime loop and the application.
//!
//! The runtime owns the window, GPU and input state; the app sees them only
//! through [`FrameCtx`] for the duration of one frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
