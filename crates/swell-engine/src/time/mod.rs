//! Time subsystem.
//!
//! One `FrameClock` per window, ticked once per presented frame. The clock
//! also carries the monotonic elapsed time the shading kernel animates with.
//! `FpsCounter` turns ticks into the readout shown in the debug panel.

mod fps;
mod frame_clock;

pub use fps::FpsCounter;
pub use frame_clock::{FrameClock, FrameTime};
