use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// One line of text. Panel labels never wrap.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Logical pixels; the renderer rasterizes at `size * scale_factor`.
    pub size: f32,
    pub color: Color,
    /// Top-left of the line box.
    pub origin: Vec2,
}

impl DrawList {
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let text = text.into();
        if text.is_empty() || size <= 0.0 {
            return;
        }
        self.push(z, DrawCmd::Text(TextCmd { text, font, size, color, origin }));
    }
}
