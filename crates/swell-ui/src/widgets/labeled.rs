use swell_engine::coords::{Rect, Vec2};
use swell_engine::paint::Color;
use swell_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

const ROW_HEIGHT: f32 = 20.0;

/// One panel row: a name on the left, the control in the middle and the
/// control's current value on the right.
pub struct Labeled {
    label: String,
    font: FontId,
    font_size: f32,
    color: Color,
    label_width: f32,
    readout_width: f32,
    control: Element,
}

impl Labeled {
    pub fn new(label: impl Into<String>, font: FontId, control: impl Into<Element>) -> Self {
        Self {
            label: label.into(),
            font,
            font_size: 12.0,
            color: Color::from_srgb_u8(0xbb, 0xbc, 0xc4, 0xff),
            label_width: 84.0,
            readout_width: 44.0,
            control: control.into(),
        }
    }

    pub fn label_width(mut self, w: f32) -> Self {
        self.label_width = w;
        self
    }

    /// Splits the row into (label, control, readout).
    fn columns(&self, rect: Rect) -> (Rect, Rect, Rect) {
        let (label, rest) = rect.split_left(self.label_width);
        let (control, readout) = rest.split_left((rest.size.x - self.readout_width - 6.0).max(0.0));
        (label, control, Rect::new(readout.origin.x + 6.0, readout.origin.y, (readout.size.x - 6.0).max(0.0), readout.size.y))
    }

    fn control_rect(&self, slot: Rect, ctx: &LayoutCtx) -> Rect {
        let size = self.control.measure(Constraints::loose(slot.size), ctx);
        // Fill the slot horizontally; center vertically.
        Rect::new(slot.origin.x, slot.origin.y + (slot.size.y - size.y).max(0.0) * 0.5, slot.size.x, size.y)
    }
}

impl Widget for Labeled {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let width = constraints.finite_width().unwrap_or(280.0);
        let control = self.control.measure(Constraints::loose(Vec2::new(width, f32::INFINITY)), ctx);
        constraints.constrain(Vec2::new(width, control.y.max(ROW_HEIGHT)))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let (label, slot, readout) = self.columns(rect);
        let ctx = painter.layout_ctx();

        let line = painter.measure_text(&self.label, self.font, self.font_size).y;
        let y = rect.origin.y + (rect.size.y - line) * 0.5;
        painter.text(self.label.clone(), self.font, self.font_size, self.color, Vec2::new(label.origin.x, y));

        self.control.paint(painter, self.control_rect(slot, &ctx));

        if let Some(value) = self.control.readout() {
            let w = painter.measure_text(&value, self.font, self.font_size).x;
            let x = (readout.max().x - w).max(readout.origin.x);
            painter.text(value, self.font, self.font_size, self.color, Vec2::new(x, y));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let (_, slot, _) = self.columns(rect);
        let control = self.control_rect(slot, ctx);
        self.control.on_event(event, control, ctx)
    }

    fn readout(&self) -> Option<String> {
        self.control.readout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::slider::Slider;
    use swell_engine::text::FontSystem;

    #[test]
    fn events_reach_control_in_its_column() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let mut row = Labeled::new("Frequency", FontId::default(), Slider::new(0.0, 20.0).step(0.1))
            .label_width(100.0);
        let rect = Rect::new(0.0, 0.0, 300.0, 20.0);

        // Label column swallows nothing.
        let p = Vec2::new(50.0, 10.0);
        assert_eq!(row.on_event(&UiEvent::Drag { pos: p, start: p }, rect, &ctx), EventResult::Ignored);

        // The control spans x in [100, 250).
        let p = Vec2::new(175.0, 10.0);
        assert!(row.on_event(&UiEvent::Drag { pos: p, start: p }, rect, &ctx).is_consumed());
        assert_eq!(row.readout().as_deref(), Some("10.0"));
    }

    #[test]
    fn row_is_at_least_one_line_tall() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let row = Labeled::new("x", FontId::default(), Slider::new(-100.0, 100.0));
        let size = row.measure(Constraints::loose(Vec2::new(300.0, 100.0)), &ctx);
        assert_eq!(size, Vec2::new(300.0, ROW_HEIGHT));
    }
}
