use swell_engine::coords::{Rect, Vec2};
use swell_engine::paint::Color;
use swell_engine::text::FontId;

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};
use crate::widgets::flex::Column;

const HEADER_HEIGHT: f32 = 24.0;
const BODY_PADDING: f32 = 6.0;

/// Titled group whose body collapses when the header is clicked.
pub struct Folder {
    title: String,
    font: FontId,
    font_size: f32,
    expanded: bool,
    header_color: Color,
    title_color: Color,
    body: Column,
}

impl Folder {
    pub fn new(title: impl Into<String>, font: FontId) -> Self {
        Self {
            title: title.into(),
            font,
            font_size: 13.0,
            expanded: false,
            header_color: Color::from_srgb_u8(0x2c, 0x2d, 0x31, 0xff),
            title_color: Color::from_srgb_u8(0xbb, 0xbc, 0xc4, 0xff),
            body: Column::new()
                .spacing(4.0)
                .padding(Edges { top: BODY_PADDING, right: 0.0, bottom: 0.0, left: BODY_PADDING }),
        }
    }

    pub fn expanded(mut self, v: bool) -> Self {
        self.expanded = v;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.body = self.body.child(child);
        self
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    fn split(&self, rect: Rect) -> (Rect, Rect) {
        let header = Rect::new(rect.origin.x, rect.origin.y, rect.size.x, HEADER_HEIGHT);
        let body = Rect::new(
            rect.origin.x,
            rect.origin.y + HEADER_HEIGHT,
            rect.size.x,
            (rect.size.y - HEADER_HEIGHT).max(0.0),
        );
        (header, body)
    }

    fn body_size(&self, width: f32, ctx: &LayoutCtx) -> Vec2 {
        self.body.measure(Constraints::loose(Vec2::new(width, f32::INFINITY)), ctx)
    }
}

impl Widget for Folder {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let width = constraints.finite_width().unwrap_or(240.0);
        let mut h = HEADER_HEIGHT;
        if self.expanded {
            h += self.body_size(width, ctx).y;
        }
        constraints.constrain(Vec2::new(width, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let (header, body) = self.split(rect);
        let hovered = painter.is_hovered(header);
        let bg = if hovered { self.header_color.with_alpha(0.8) } else { self.header_color };
        painter.fill_rounded_rect(header, 3.0, bg, None);

        let marker = if self.expanded { "▾" } else { "▸" };
        let line = painter.measure_text(&self.title, self.font, self.font_size).y;
        let y = header.origin.y + (HEADER_HEIGHT - line) * 0.5;
        painter.text(
            format!("{marker} {}", self.title),
            self.font,
            self.font_size,
            self.title_color,
            Vec2::new(header.origin.x + 8.0, y),
        );

        if self.expanded {
            self.body.paint(painter, body);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let (header, body) = self.split(rect);
        if let UiEvent::Click { pos } = event {
            if header.contains(*pos) {
                self.expanded = !self.expanded;
                log::debug!("folder '{}' expanded={}", self.title, self.expanded);
                return EventResult::Consumed;
            }
        }
        if self.expanded {
            return self.body.on_event(event, body, ctx);
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::slider::Slider;
    use swell_engine::text::FontSystem;

    #[test]
    fn clicking_header_collapses_body() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let mut folder = Folder::new("X", FontId::default())
            .expanded(true)
            .child(Slider::new(0.0, 20.0))
            .child(Slider::new(0.0, 5.0));

        let c = Constraints::loose(Vec2::new(200.0, 1000.0));
        let open = folder.measure(c, &ctx);
        // two 16px sliders, one gap, top padding
        assert_eq!(open.y, HEADER_HEIGHT + BODY_PADDING + 16.0 + 4.0 + 16.0);

        let rect = Rect { origin: Vec2::zero(), size: open };
        let click = UiEvent::Click { pos: Vec2::new(20.0, 10.0) };
        assert!(folder.on_event(&click, rect, &ctx).is_consumed());
        assert!(!folder.is_expanded());
        assert_eq!(folder.measure(c, &ctx).y, HEADER_HEIGHT);
    }

    #[test]
    fn collapsed_body_receives_nothing() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let mut folder = Folder::new("Y", FontId::default()).child(Slider::new(0.0, 1.0));

        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let drag = UiEvent::Drag { pos: Vec2::new(100.0, 40.0), start: Vec2::new(100.0, 40.0) };
        assert_eq!(folder.on_event(&drag, rect, &ctx), EventResult::Ignored);
    }
}
