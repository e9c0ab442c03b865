use swell_engine::coords::{Rect, Vec2};
use swell_engine::paint::Color;
use swell_engine::scene::Border;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

/// Horizontal slider over `[min, max]`, snapped to `step`.
///
/// Pressing on the track jumps to that value; `on_change` fires on every
/// drag move that changes the value, not only on release.
pub struct Slider {
    value: f32,
    min: f32,
    max: f32,
    step: f32,
    track_height: f32,
    thumb_radius: f32,
    track_color: Color,
    fill_color: Color,
    thumb_color: Color,
    on_change: Option<Box<dyn FnMut(f32)>>,
}

impl Slider {
    pub fn new(min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: min,
            min,
            max,
            step: 0.0,
            track_height: 4.0,
            thumb_radius: 6.0,
            track_color: Color::from_srgb_u8(0x37, 0x38, 0x3d, 0xff),
            fill_color: Color::from_srgb_u8(0x6e, 0xa8, 0xfe, 0xff),
            thumb_color: Color::from_srgb_u8(0xe6, 0xe6, 0xea, 0xff),
            on_change: None,
        }
    }

    /// `0` disables snapping.
    pub fn step(mut self, step: f32) -> Self {
        self.step = step.max(0.0);
        self.value = self.snap(self.value);
        self
    }

    pub fn value(mut self, v: f32) -> Self {
        self.value = self.snap(v);
        self
    }

    pub fn fill_color(mut self, c: Color) -> Self {
        self.fill_color = c;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    /// Clamps into range and rounds to the nearest step from `min`.
    pub fn snap(&self, v: f32) -> f32 {
        let v = v.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return v;
        }
        let snapped = self.min + ((v - self.min) / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }

    /// Decimal places implied by the step (0.01 → 2).
    pub fn decimals(&self) -> usize {
        if self.step <= 0.0 {
            return 3;
        }
        let mut d = 0;
        let mut s = self.step;
        while d < 6 && (s - s.round()).abs() > 1e-4 {
            s *= 10.0;
            d += 1;
        }
        d
    }

    fn normalized(&self) -> f32 {
        let span = self.max - self.min;
        if span <= f32::EPSILON {
            0.0
        } else {
            (self.value - self.min) / span
        }
    }

    fn set_from_x(&mut self, x: f32, rect: Rect) {
        let t = if rect.size.x > 0.0 {
            ((x - rect.origin.x) / rect.size.x).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let v = self.snap(self.min + t * (self.max - self.min));
        if v != self.value {
            self.value = v;
            if let Some(f) = &mut self.on_change {
                f(v);
            }
        }
    }
}

impl Widget for Slider {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let w = constraints.finite_width().unwrap_or(160.0);
        constraints.constrain(Vec2::new(w, self.thumb_radius * 2.0 + 4.0))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let cy = rect.origin.y + rect.size.y * 0.5;
        let track = Rect::new(rect.origin.x, cy - self.track_height * 0.5, rect.size.x, self.track_height);
        let radius = self.track_height * 0.5;
        painter.fill_rounded_rect(track, radius, self.track_color, None);

        let thumb_x = track.origin.x + self.normalized() * track.size.x;
        let filled = thumb_x - track.origin.x;
        if filled > 0.0 {
            let fill = Rect::new(track.origin.x, track.origin.y, filled, track.size.y);
            painter.fill_rounded_rect(fill, radius, self.fill_color, None);
        }

        let r = if painter.is_hovered(rect) { self.thumb_radius + 1.0 } else { self.thumb_radius };
        painter.fill_circle(
            Vec2::new(thumb_x, cy),
            r,
            self.thumb_color,
            Some(Border::new(1.0, self.fill_color)),
        );
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        match event {
            UiEvent::Drag { pos, start } | UiEvent::DragEnd { pos, start } if rect.contains(*start) => {
                self.set_from_x(pos.x, rect);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn readout(&self) -> Option<String> {
        Some(format!("{:.*}", self.decimals(), self.value))
    }
}
