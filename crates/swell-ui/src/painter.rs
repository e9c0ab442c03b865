use swell_engine::coords::{Rect, Vec2};
use swell_engine::paint::Color;
use swell_engine::scene::{Border, DrawList, ZIndex};
use swell_engine::text::{FontId, FontSystem};

use crate::constraints::LayoutCtx;

/// Drawing surface handed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Every call gets the next z-index, so later calls paint on top.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    pub scale: f32,
    z: i32,
    pub mouse_pos: Vec2,
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        font_system: &'a FontSystem,
        mouse_pos: Vec2,
        mouse_pressed: bool,
        scale: f32,
    ) -> Self {
        Self { draw_list, font_system, scale, z: 0, mouse_pos, mouse_pressed }
    }

    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_pos)
    }

    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.font_system.measure_text_scaled(text, font, size, self.scale)
    }

    /// Layout context for containers that re-measure children while painting.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'a> {
        LayoutCtx { fonts: self.font_system, scale: self.scale }
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Color, border: Option<Border>) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, radius, fill, border);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Color, border: Option<Border>) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, fill, border);
    }

    /// Single line of text with its top-left at `origin`.
    pub fn text(&mut self, text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
