use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// What the runtime should do after an app callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Implemented by the binary that drives the runtime.
pub trait App {
    /// Raw window events, after the runtime has folded them into input state.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
