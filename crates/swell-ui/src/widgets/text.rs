use std::cell::RefCell;
use std::rc::Rc;

use swell_engine::coords::{Rect, Vec2};
use swell_engine::paint::Color;
use swell_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

enum Content {
    Static(String),
    /// Owned by the app and rewritten between frames (FPS readout).
    Shared(Rc<RefCell<String>>),
}

/// One line of text.
pub struct Text {
    content: Content,
    font: FontId,
    size: f32,
    color: Color,
}

impl Text {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color) -> Self {
        Self { content: Content::Static(text.into()), font, size, color }
    }

    /// Text that re-reads `source` every frame.
    pub fn shared(source: Rc<RefCell<String>>, font: FontId, size: f32, color: Color) -> Self {
        Self { content: Content::Shared(source), font, size, color }
    }

    fn with_str<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        match &self.content {
            Content::Static(s) => f(s),
            Content::Shared(s) => f(&s.borrow()),
        }
    }
}

impl Widget for Text {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let size = self.with_str(|s| ctx.measure_text(s, self.font, self.size));
        constraints.constrain(size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let text = self.with_str(str::to_owned);
        painter.text(text, self.font, self.size, self.color, rect.origin);
    }
}
