use swell_engine::coords::Vec2;

/// Pointer events routed through the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer position, sent every frame.
    Hover { pos: Vec2 },
    /// Primary button pressed and released without leaving the click slop.
    Click { pos: Vec2 },
    /// Primary button held; `start` is where the press began. Also sent on
    /// the press frame itself with `pos == start`.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released after a press, wherever the pointer is.
    DragEnd { pos: Vec2, start: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Stop routing.
    Consumed,
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
