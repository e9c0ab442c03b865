use swell_engine::coords::{Rect, Vec2};

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Cross-axis placement of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Fill the cross axis when it is bounded.
    #[default]
    Stretch,
    Start,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Vertical,
    Horizontal,
}

/// Shared stacking layout behind [`Column`] and [`Row`].
struct Flex {
    direction: Direction,
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
    align: Align,
}

impl Flex {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            children: Vec::new(),
            spacing: 0.0,
            padding: Edges::default(),
            align: Align::Stretch,
        }
    }

    /// Splits a size into (main, cross) for this direction.
    fn split(&self, v: Vec2) -> (f32, f32) {
        match self.direction {
            Direction::Vertical => (v.y, v.x),
            Direction::Horizontal => (v.x, v.y),
        }
    }

    fn join(&self, main: f32, cross: f32) -> Vec2 {
        match self.direction {
            Direction::Vertical => Vec2::new(cross, main),
            Direction::Horizontal => Vec2::new(main, cross),
        }
    }

    fn child_constraints(&self, inner_cross: f32) -> Constraints {
        let min_cross = if self.align == Align::Stretch && inner_cross.is_finite() {
            inner_cross
        } else {
            0.0
        };
        Constraints {
            min: self.join(0.0, min_cross),
            max: self.join(f32::INFINITY, inner_cross),
        }
    }

    fn gaps(&self) -> f32 {
        self.children.len().saturating_sub(1) as f32 * self.spacing
    }

    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let (_, inner_cross) = self.split(constraints.shrink(self.padding).max);
        let child_c = self.child_constraints(inner_cross);

        let (mut main, mut cross) = (self.gaps(), 0.0f32);
        for child in &self.children {
            let (m, c) = self.split(child.measure(child_c, ctx));
            main += m;
            cross = cross.max(c);
        }

        let (pad_main, pad_cross) = self.split(Vec2::new(self.padding.h(), self.padding.v()));
        let (_, max_cross) = self.split(constraints.max);
        let cross = if self.align == Align::Stretch && max_cross.is_finite() {
            max_cross
        } else {
            cross + pad_cross
        };
        constraints.constrain(self.join(main + pad_main, cross))
    }

    /// Rect of every child inside `rect`, in order.
    fn layout(&self, rect: Rect, ctx: &LayoutCtx) -> Vec<Rect> {
        let inner = inset_rect(rect, self.padding);
        let (main_origin, cross_origin) = self.split(inner.origin);
        let (_, inner_cross) = self.split(inner.size);
        let child_c = self.child_constraints(inner_cross);

        let mut cursor = main_origin;
        self.children
            .iter()
            .map(|child| {
                let size = child.measure(child_c, ctx);
                let (m, c) = self.split(size);
                let offset = match self.align {
                    Align::Stretch | Align::Start => 0.0,
                    Align::Center => (inner_cross - c) * 0.5,
                };
                let origin = self.join(cursor, cross_origin + offset);
                cursor += m + self.spacing;
                Rect { origin, size }
            })
            .collect()
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        for (child, r) in self.children.iter().zip(self.layout(rect, &ctx)) {
            child.paint(painter, r);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let rects = self.layout(rect, ctx);
        for (child, r) in self.children.iter_mut().zip(rects) {
            if child.on_event(event, r, ctx).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

macro_rules! flex_widget {
    ($(#[$doc:meta])* $name:ident, $direction:expr) => {
        $(#[$doc])*
        pub struct $name(Flex);

        impl $name {
            pub fn new() -> Self {
                Self(Flex::new($direction))
            }

            pub fn spacing(mut self, v: f32) -> Self {
                self.0.spacing = v;
                self
            }

            pub fn padding(mut self, edges: Edges) -> Self {
                self.0.padding = edges;
                self
            }

            pub fn align(mut self, align: Align) -> Self {
                self.0.align = align;
                self
            }

            pub fn child(mut self, child: impl Into<Element>) -> Self {
                self.0.children.push(child.into());
                self
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Widget for $name {
            fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
                self.0.measure(constraints, ctx)
            }

            fn paint(&self, painter: &mut Painter, rect: Rect) {
                self.0.paint(painter, rect)
            }

            fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
                self.0.on_event(event, rect, ctx)
            }
        }
    };
}

flex_widget!(
    /// Children stacked top to bottom.
    Column,
    Direction::Vertical
);

flex_widget!(
    /// Children placed left to right.
    Row,
    Direction::Horizontal
);

#[cfg(test)]
mod tests {
    use super::*;
    use swell_engine::text::FontSystem;

    struct Fixed(Vec2);

    impl Widget for Fixed {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.constrain(self.0)
        }
        fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
    }

    fn with_ctx(f: impl FnOnce(&LayoutCtx)) {
        let fonts = FontSystem::new();
        f(&LayoutCtx { fonts: &fonts, scale: 1.0 });
    }

    #[test]
    fn column_stacks_with_spacing_and_padding() {
        with_ctx(|ctx| {
            let col = Column::new()
                .spacing(4.0)
                .padding(Edges::all(2.0))
                .child(Fixed(Vec2::new(10.0, 20.0)))
                .child(Fixed(Vec2::new(30.0, 5.0)));

            let size = col.measure(Constraints::loose(Vec2::new(100.0, 500.0)), ctx);
            // stretch fills the bounded width
            assert_eq!(size, Vec2::new(100.0, 20.0 + 4.0 + 5.0 + 4.0));

            let rects = col.0.layout(Rect::new(0.0, 0.0, 100.0, 33.0), ctx);
            assert_eq!(rects[0], Rect::new(2.0, 2.0, 96.0, 20.0));
            assert_eq!(rects[1], Rect::new(2.0, 26.0, 96.0, 5.0));
        });
    }

    #[test]
    fn row_centers_on_cross_axis() {
        with_ctx(|ctx| {
            let row = Row::new()
                .align(Align::Center)
                .spacing(10.0)
                .child(Fixed(Vec2::new(10.0, 10.0)))
                .child(Fixed(Vec2::new(20.0, 30.0)));

            let size = row.measure(Constraints::loose(Vec2::new(500.0, 500.0)), ctx);
            assert_eq!(size, Vec2::new(40.0, 30.0));

            let rects = row.0.layout(Rect::new(0.0, 0.0, 40.0, 30.0), ctx);
            assert_eq!(rects[0], Rect::new(0.0, 10.0, 10.0, 10.0));
            assert_eq!(rects[1], Rect::new(20.0, 0.0, 20.0, 30.0));
        });
    }

    #[test]
    fn unbounded_stretch_uses_content_size() {
        with_ctx(|ctx| {
            let col = Column::new().child(Fixed(Vec2::new(12.0, 3.0)));
            let size = col.measure(Constraints::loose(Vec2::new(f32::INFINITY, 50.0)), ctx);
            assert_eq!(size, Vec2::new(12.0, 3.0));
        });
    }
}
