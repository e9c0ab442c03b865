use std::collections::HashSet;

use super::types::Key;

/// Per-frame input deltas.
///
/// `InputState` holds what is currently down; `InputFrame` holds what changed
/// since the last presented frame. Cleared by the runtime after each frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys that went down this frame; repeats excluded.
    pub keys_pressed: HashSet<Key>,

    /// Accumulated pointer motion in logical px.
    pub pointer_delta: (f32, f32),

    /// Accumulated vertical wheel motion in lines.
    pub wheel_lines: f32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.pointer_delta = (0.0, 0.0);
        self.wheel_lines = 0.0;
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
