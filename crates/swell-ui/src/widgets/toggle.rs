use std::cell::Cell;
use std::rc::Rc;

use swell_engine::coords::{Rect, Vec2};
use swell_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// Pill-shaped on/off switch.
///
/// The state may be shared with the app through [`Toggle::bind`] so a
/// keyboard shortcut and the switch stay in agreement.
pub struct Toggle {
    checked: Rc<Cell<bool>>,
    width: f32,
    height: f32,
    on_color: Color,
    off_color: Color,
    thumb_color: Color,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl Toggle {
    pub fn new() -> Self {
        Self {
            checked: Rc::new(Cell::new(false)),
            width: 34.0,
            height: 18.0,
            on_color: Color::from_srgb_u8(0x6e, 0xa8, 0xfe, 0xff),
            off_color: Color::from_srgb_u8(0x37, 0x38, 0x3d, 0xff),
            thumb_color: Color::from_srgb_u8(0xe6, 0xe6, 0xea, 0xff),
            on_change: None,
        }
    }

    pub fn checked(self, v: bool) -> Self {
        self.checked.set(v);
        self
    }

    /// Reads and writes the state through `cell`.
    pub fn bind(mut self, cell: Rc<Cell<bool>>) -> Self {
        self.checked = cell;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Toggle {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(Vec2::new(self.width, self.height))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // Keep the natural size even when the parent stretches us.
        let w = self.width.min(rect.size.x);
        let h = self.height.min(rect.size.y);
        let track = Rect::new(rect.origin.x, rect.origin.y + (rect.size.y - h) * 0.5, w, h);

        let checked = self.is_checked();
        let color = if checked { self.on_color } else { self.off_color };
        painter.fill_rounded_rect(track, h * 0.5, color, None);

        let margin = h * 0.15;
        let r = h * 0.5 - margin;
        let cx = if checked {
            track.origin.x + w - margin - r
        } else {
            track.origin.x + margin + r
        };
        painter.fill_circle(Vec2::new(cx, track.center().y), r, self.thumb_color, None);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        if let UiEvent::Click { pos } = event {
            if rect.contains(*pos) {
                let next = !self.checked.get();
                self.checked.set(next);
                if let Some(f) = &mut self.on_change {
                    f(next);
                }
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }

    fn readout(&self) -> Option<String> {
        Some(if self.is_checked() { "on" } else { "off" }.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swell_engine::text::FontSystem;

    #[test]
    fn click_inside_flips_and_notifies() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let last = Rc::new(Cell::new(None));
        let sink = last.clone();
        let mut t = Toggle::new().on_change(move |v| sink.set(Some(v)));
        let rect = Rect::new(0.0, 0.0, 34.0, 18.0);

        let outside = UiEvent::Click { pos: Vec2::new(50.0, 5.0) };
        assert_eq!(t.on_event(&outside, rect, &ctx), EventResult::Ignored);
        assert_eq!(last.get(), None);

        let inside = UiEvent::Click { pos: Vec2::new(5.0, 5.0) };
        assert!(t.on_event(&inside, rect, &ctx).is_consumed());
        assert!(t.is_checked());
        assert_eq!(last.get(), Some(true));

        t.on_event(&inside, rect, &ctx);
        assert_eq!(last.get(), Some(false));
    }

    #[test]
    fn bound_cell_is_the_state() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let cell = Rc::new(Cell::new(false));
        let mut t = Toggle::new().bind(cell.clone());

        cell.set(true);
        assert!(t.is_checked());

        let click = UiEvent::Click { pos: Vec2::new(5.0, 5.0) };
        t.on_event(&click, Rect::new(0.0, 0.0, 34.0, 18.0), &ctx);
        assert!(!cell.get());
    }
}
