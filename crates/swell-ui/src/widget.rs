use swell_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// A node in the panel tree.
pub trait Widget: 'static {
    /// Desired size within `constraints`. Must be deterministic: parents call
    /// it again while painting and routing events.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Draws into `rect`, the space the parent allotted.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        EventResult::Ignored
    }

    /// Current value as display text, for controls that have one.
    fn readout(&self) -> Option<String> {
        None
    }
}

/// Type-erased widget; the child type of every container.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.0.on_event(event, rect, ctx)
    }

    #[inline]
    pub fn readout(&self) -> Option<String> {
        self.0.readout()
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
