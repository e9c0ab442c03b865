use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command.
///
/// Each variant has a matching renderer under `render::shapes`. Circles are
/// rounded rects whose radius is half their side.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
    Text(TextCmd),
}
