use swell_engine::coords::{Rect, Vec2};
use swell_engine::text::FontSystem;

/// Insets on all four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Total horizontal inset.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

/// Size bounds handed from parent to child during measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// Clamps `size` into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Shrinks `max` by `edges`; `min` becomes zero.
    #[inline]
    #[must_use]
    pub fn shrink(self, edges: Edges) -> Self {
        Self {
            min: Vec2::zero(),
            max: Vec2::new(
                (self.max.x - edges.h()).max(0.0),
                (self.max.y - edges.v()).max(0.0),
            ),
        }
    }

    /// Width bound if it is finite.
    #[inline]
    pub fn finite_width(self) -> Option<f32> {
        self.max.x.is_finite().then_some(self.max.x)
    }
}

/// Shared resources for measuring and routing events.
#[derive(Clone, Copy)]
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
    /// Raster scale of the text renderer; keeps measured widths in step
    /// with drawn glyphs on HiDPI displays.
    pub scale: f32,
}

impl<'a> LayoutCtx<'a> {
    pub fn measure_text(&self, text: &str, font: swell_engine::text::FontId, size: f32) -> Vec2 {
        self.fonts.measure_text_scaled(text, font, size, self.scale)
    }
}

/// Shrinks a rect by `edges`.
#[inline]
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.origin.x + edges.left,
        rect.origin.y + edges.top,
        (rect.size.x - edges.h()).max(0.0),
        (rect.size.y - edges.v()).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_both_ways() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 50.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 80.0)), Vec2::new(10.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(20.0, 30.0)), Vec2::new(20.0, 30.0));
    }

    #[test]
    fn shrink_clamps_to_zero() {
        let c = Constraints::loose(Vec2::new(30.0, 5.0));
        let s = c.shrink(Edges::symmetric(4.0, 10.0));
        assert_eq!(s.max, Vec2::new(10.0, 0.0));
        assert_eq!(s.min, Vec2::zero());
    }

    #[test]
    fn finite_width_ignores_unbounded() {
        assert_eq!(Constraints::loose(Vec2::new(f32::INFINITY, 1.0)).finite_width(), None);
        assert_eq!(Constraints::tight(Vec2::new(12.0, 1.0)).finite_width(), Some(12.0));
    }

    #[test]
    fn inset_rect_asymmetric() {
        let edges = Edges { top: 4.0, bottom: 8.0, left: 6.0, right: 10.0 };
        let inner = inset_rect(Rect::new(5.0, 5.0, 100.0, 60.0), edges);
        assert_eq!(inner, Rect::new(11.0, 9.0, 84.0, 48.0));
    }
}
