use swell_engine::coords::{Rect, Vec2};
use swell_engine::paint::Color;
use swell_engine::scene::Border;

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Single child with padding and an optional rounded background.
pub struct Container {
    child: Option<Element>,
    padding: Edges,
    background: Option<Color>,
    border: Option<Border>,
    corner_radius: f32,
    width: Option<f32>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            child: None,
            padding: Edges::default(),
            background: None,
            border: None,
            corner_radius: 0.0,
            width: None,
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    /// Fixed outer width, still clamped by the parent's constraints.
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }

    fn outer_constraints(&self, constraints: Constraints) -> Constraints {
        match self.width {
            Some(w) => {
                let w = w.clamp(constraints.min.x, constraints.max.x);
                Constraints {
                    min: Vec2::new(w, constraints.min.y),
                    max: Vec2::new(w, constraints.max.y),
                }
            }
            None => constraints,
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let outer = self.outer_constraints(constraints);
        let child = self
            .child
            .as_ref()
            .map(|c| c.measure(outer.shrink(self.padding), ctx))
            .unwrap_or_default();
        outer.constrain(Vec2::new(child.x + self.padding.h(), child.y + self.padding.v()))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if let Some(bg) = self.background {
            painter.fill_rounded_rect(rect, self.corner_radius, bg, self.border);
        }
        if let Some(child) = &self.child {
            child.paint(painter, inset_rect(rect, self.padding));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        match &mut self.child {
            Some(child) => child.on_event(event, inset_rect(rect, self.padding), ctx),
            None => EventResult::Ignored,
        }
    }
}
