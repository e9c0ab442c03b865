use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rounded rectangle draw payload with a uniform corner radius.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub fill: Color,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a rounded rectangle. The radius is clamped to half the short side.
    #[inline]
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radius: f32,
        fill: Color,
        border: Option<Border>,
    ) {
        let radius = radius.clamp(0.0, 0.5 * rect.size.x.min(rect.size.y).max(0.0));
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radius, fill, border }));
    }

    #[inline]
    pub fn push_solid_rounded_rect(&mut self, z: ZIndex, rect: Rect, radius: f32, color: Color) {
        self.push_rounded_rect(z, rect, radius, color, None);
    }

    /// Records a circle as a fully rounded square.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Color,
        border: Option<Border>,
    ) {
        let rect = Rect::new(center.x - radius, center.y - radius, 2.0 * radius, 2.0 * radius);
        self.push_rounded_rect(z, rect, radius, fill, border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_clamped_to_half_short_side() {
        let mut list = DrawList::new();
        list.push_solid_rounded_rect(ZIndex(0), Rect::new(0.0, 0.0, 40.0, 10.0), 99.0, Color::transparent());
        let DrawCmd::RoundedRect(cmd) = &list.items()[0].cmd else { panic!("expected rounded rect") };
        assert_eq!(cmd.radius, 5.0);
    }

    #[test]
    fn circle_is_square_with_half_radius() {
        let mut list = DrawList::new();
        list.push_circle(ZIndex(0), Vec2::new(10.0, 10.0), 4.0, Color::transparent(), None);
        let DrawCmd::RoundedRect(cmd) = &list.items()[0].cmd else { panic!("expected rounded rect") };
        assert_eq!(cmd.rect, Rect::new(6.0, 6.0, 8.0, 8.0));
        assert_eq!(cmd.radius, 4.0);
    }
}
