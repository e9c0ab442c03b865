use swell_engine::coords::{Rect, Vec2};
use swell_engine::paint::Color;
use swell_engine::scene::Border;
use swell_engine::text::FontId;
use swell_kernel::Rgb;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::slider::Slider;

const HEADER_HEIGHT: f32 = 20.0;
const ROW_HEIGHT: f32 = 16.0;
const ROW_GAP: f32 = 4.0;
const CHANNEL_LABEL_WIDTH: f32 = 16.0;
const CHANNELS: [&str; 3] = ["R", "G", "B"];

/// Color picker: a swatch with its hex code above one 0..=255 slider per
/// channel.
pub struct ColorField {
    label: String,
    font: FontId,
    font_size: f32,
    text_color: Color,
    rgb: Rgb,
    channels: [Slider; 3],
    on_change: Option<Box<dyn FnMut(Rgb)>>,
}

impl ColorField {
    pub fn new(label: impl Into<String>, font: FontId, initial: Rgb) -> Self {
        let channel = |v: f32| Slider::new(0.0, 255.0).step(1.0).value((v * 255.0).round());
        Self {
            label: label.into(),
            font,
            font_size: 12.0,
            text_color: Color::from_srgb_u8(0xbb, 0xbc, 0xc4, 0xff),
            rgb: initial,
            channels: [
                channel(initial.r).fill_color(Color::from_srgb_u8(0xe0, 0x55, 0x55, 0xff)),
                channel(initial.g).fill_color(Color::from_srgb_u8(0x55, 0xc0, 0x6a, 0xff)),
                channel(initial.b).fill_color(Color::from_srgb_u8(0x55, 0x88, 0xe0, 0xff)),
            ],
            on_change: None,
        }
    }

    pub fn on_change(mut self, f: impl FnMut(Rgb) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    fn from_channels(&self) -> Rgb {
        let [r, g, b] = &self.channels;
        Rgb::from_u8(r.get() as u8, g.get() as u8, b.get() as u8)
    }

    /// Header rect, then one (label, slider) pair per channel.
    fn rows(rect: Rect) -> (Rect, [(Rect, Rect); 3]) {
        let header = Rect::new(rect.origin.x, rect.origin.y, rect.size.x, HEADER_HEIGHT);
        let rows = std::array::from_fn(|i| {
            let y = rect.origin.y + HEADER_HEIGHT + ROW_GAP + i as f32 * (ROW_HEIGHT + ROW_GAP);
            Rect::new(rect.origin.x, y, rect.size.x, ROW_HEIGHT).split_left(CHANNEL_LABEL_WIDTH)
        });
        (header, rows)
    }
}

impl Widget for ColorField {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let w = constraints.finite_width().unwrap_or(200.0);
        let h = HEADER_HEIGHT + 3.0 * (ROW_HEIGHT + ROW_GAP);
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let (header, rows) = Self::rows(rect);
        let line = painter.measure_text(&self.label, self.font, self.font_size).y;
        let text_y = header.origin.y + (HEADER_HEIGHT - line) * 0.5;
        painter.text(
            self.label.clone(),
            self.font,
            self.font_size,
            self.text_color,
            Vec2::new(header.origin.x, text_y),
        );

        let hex = self.rgb.to_hex();
        let hex_w = painter.measure_text(&hex, self.font, self.font_size).x;
        let hex_x = header.max().x - hex_w;
        painter.text(hex, self.font, self.font_size, self.text_color, Vec2::new(hex_x, text_y));

        let swatch = Rect::new(hex_x - 8.0 - 28.0, header.origin.y + 3.0, 28.0, HEADER_HEIGHT - 6.0);
        painter.fill_rounded_rect(
            swatch,
            3.0,
            Color::from_rgb(self.rgb),
            Some(Border::new(1.0, self.text_color.with_alpha(0.5))),
        );

        for ((label_rect, slider_rect), (name, slider)) in rows.iter().zip(CHANNELS.iter().zip(&self.channels)) {
            painter.text(
                *name,
                self.font,
                self.font_size,
                self.text_color,
                Vec2::new(label_rect.origin.x, label_rect.origin.y),
            );
            slider.paint(painter, *slider_rect);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let (_, rows) = Self::rows(rect);
        let consumed = rows
            .iter()
            .zip(self.channels.iter_mut())
            .any(|((_, slider_rect), slider)| slider.on_event(event, *slider_rect, ctx).is_consumed());
        if !consumed {
            return EventResult::Ignored;
        }

        // Only a channel edit may change the color; the stored value can sit
        // off the 1/255 grid the sliders snap to.
        let next = self.from_channels();
        if next != self.rgb {
            self.rgb = next;
            if let Some(f) = &mut self.on_change {
                f(next);
            }
        }
        EventResult::Consumed
    }

    fn readout(&self) -> Option<String> {
        Some(self.rgb.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use swell_engine::text::FontSystem;

    #[test]
    fn dragging_a_channel_reports_the_new_color() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        let mut field = ColorField::new("Color", FontId::default(), Rgb::from_u8(0, 0, 0))
            .on_change(move |c| sink.set(Some(c)));

        let rect = Rect::new(0.0, 0.0, 271.0, 80.0);
        let (_, rows) = ColorField::rows(rect);
        let green = rows[1].1;
        assert_eq!(green.origin.x, CHANNEL_LABEL_WIDTH);
        assert_eq!(green.size.x, 255.0);

        // Just inside the right edge of the green track.
        let p = Vec2::new(green.max().x - 0.1, green.center().y);
        let ev = UiEvent::Drag { pos: p, start: p };
        assert!(field.on_event(&ev, rect, &ctx).is_consumed());
        assert_eq!(seen.get(), Some(Rgb::from_u8(0, 255, 0)));
        assert_eq!(field.readout().as_deref(), Some("#00ff00"));
    }

    #[test]
    fn off_grid_color_survives_hover() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let fired = Rc::new(Cell::new(None));
        let sink = fired.clone();
        let initial = Rgb::new(0.3, 0.3, 0.3);
        let mut field = ColorField::new("Color", FontId::default(), initial)
            .on_change(move |c| sink.set(Some(c)));

        let rect = Rect::new(0.0, 0.0, 200.0, 80.0);
        for pos in [Vec2::new(-50.0, -50.0), Vec2::new(100.0, 40.0)] {
            assert_eq!(field.on_event(&UiEvent::Hover { pos }, rect, &ctx), EventResult::Ignored);
        }
        assert_eq!(fired.get(), None);
        assert_eq!(field.rgb(), initial);
    }

    #[test]
    fn initial_color_is_kept_until_edited() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx { fonts: &fonts, scale: 1.0 };
        let initial = Rgb::from_hex("#ed6b33").unwrap_or_default();
        let mut field = ColorField::new("Color", FontId::default(), initial);

        let hover = UiEvent::Hover { pos: Vec2::new(5.0, 5.0) };
        field.on_event(&hover, Rect::new(0.0, 0.0, 200.0, 80.0), &ctx);
        assert_eq!(field.rgb().to_hex(), "#ed6b33");
    }
}
