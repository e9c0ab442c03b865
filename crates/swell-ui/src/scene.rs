use swell_engine::coords::{Rect, Vec2};
use swell_engine::input::{InputState, MouseButton};
use swell_engine::scene::DrawList;
use swell_engine::text::FontSystem;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

/// Max pointer travel, in logical pixels, for a press/release to count as a click.
const CLICK_SLOP: f32 = 4.0;

/// Pointer snapshot for one UI frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiInput {
    pub mouse_pos: Vec2,
    /// Primary button held.
    pub mouse_pressed: bool,
}

impl UiInput {
    pub fn from_state(state: &InputState) -> Self {
        let (x, y) = state.pointer_pos.unwrap_or((-1.0, -1.0));
        Self {
            mouse_pos: Vec2::new(x, y),
            mouse_pressed: state.button_down(MouseButton::Left),
        }
    }
}

/// Lays out, paints and routes pointer events for a persistent panel root.
///
/// Also turns raw button state into click and drag events, and remembers
/// where the panel was placed so the app can tell whether the pointer
/// belongs to it.
pub struct UiScene {
    pub font_system: FontSystem,
    /// Filled by [`frame_ref`](Self::frame_ref); split-borrow it with
    /// `font_system` when handing both to the renderers.
    pub draw_list: DrawList,

    root_rect: Rect,
    press_start: Option<Vec2>,
    was_pressed: bool,
    captured: bool,
}

impl UiScene {
    pub fn new(font_system: FontSystem) -> Self {
        Self {
            font_system,
            draw_list: DrawList::new(),
            root_rect: Rect::default(),
            press_start: None,
            was_pressed: false,
            captured: false,
        }
    }

    /// Runs one UI frame for `root`, placed at the top-left of `area` at its
    /// measured size.
    pub fn frame_ref(&mut self, root: &mut Element, area: Rect, input: &UiInput, scale: f32) -> &mut DrawList {
        self.draw_list.clear();

        let ctx = LayoutCtx { fonts: &self.font_system, scale };
        let size = root.measure(Constraints::loose(area.size), &ctx);
        let rect = Rect { origin: area.origin, size };
        self.root_rect = rect;

        {
            let mut painter = Painter::new(
                &mut self.draw_list,
                &self.font_system,
                input.mouse_pos,
                input.mouse_pressed,
                scale,
            );
            root.paint(&mut painter, rect);
        }

        let pos = input.mouse_pos;
        root.on_event(&UiEvent::Hover { pos }, rect, &ctx);

        match (self.was_pressed, input.mouse_pressed) {
            (false, true) => {
                self.press_start = Some(pos);
                self.captured = rect.contains(pos);
                root.on_event(&UiEvent::Drag { pos, start: pos }, rect, &ctx);
            }
            (true, true) => {
                if let Some(start) = self.press_start {
                    root.on_event(&UiEvent::Drag { pos, start }, rect, &ctx);
                }
            }
            (true, false) => {
                if let Some(start) = self.press_start.take() {
                    root.on_event(&UiEvent::DragEnd { pos, start }, rect, &ctx);
                    if (pos - start).length() <= CLICK_SLOP {
                        root.on_event(&UiEvent::Click { pos }, rect, &ctx);
                    }
                }
                self.captured = false;
            }
            (false, false) => {}
        }
        self.was_pressed = input.mouse_pressed;

        &mut self.draw_list
    }

    /// Whether `pos` is over the panel as placed by the last frame.
    pub fn hit(&self, pos: Vec2) -> bool {
        self.root_rect.contains(pos)
    }

    /// Whether the current press started over the panel.
    pub fn captures_pointer(&self) -> bool {
        self.captured
    }

    pub fn root_rect(&self) -> Rect {
        self.root_rect
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::event::EventResult;
    use crate::widget::Widget;

    struct Recorder {
        size: Vec2,
        log: Rc<RefCell<Vec<UiEvent>>>,
    }

    impl Widget for Recorder {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.constrain(self.size)
        }

        fn paint(&self, _painter: &mut Painter, _rect: Rect) {}

        fn on_event(&mut self, event: &UiEvent, _rect: Rect, _ctx: &LayoutCtx) -> EventResult {
            if !matches!(event, UiEvent::Hover { .. }) {
                self.log.borrow_mut().push(event.clone());
            }
            EventResult::Consumed
        }
    }

    fn setup() -> (UiScene, Element, Rc<RefCell<Vec<UiEvent>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let root = Element::new(Recorder { size: Vec2::new(100.0, 50.0), log: log.clone() });
        (UiScene::new(FontSystem::new()), root, log)
    }

    fn input(x: f32, y: f32, pressed: bool) -> UiInput {
        UiInput { mouse_pos: Vec2::new(x, y), mouse_pressed: pressed }
    }

    const AREA: Rect = Rect::new(10.0, 10.0, 300.0, 300.0);

    #[test]
    fn root_is_placed_at_area_origin_with_measured_size() {
        let (mut ui, mut root, _) = setup();
        let _ = ui.frame_ref(&mut root, AREA, &input(0.0, 0.0, false), 1.0);
        assert_eq!(ui.root_rect(), Rect::new(10.0, 10.0, 100.0, 50.0));
        assert!(ui.hit(Vec2::new(50.0, 30.0)));
        assert!(!ui.hit(Vec2::new(200.0, 30.0)));
    }

    #[test]
    fn press_and_release_in_place_clicks() {
        let (mut ui, mut root, log) = setup();
        let _ = ui.frame_ref(&mut root, AREA, &input(20.0, 20.0, true), 1.0);
        let _ = ui.frame_ref(&mut root, AREA, &input(21.0, 20.0, false), 1.0);

        let start = Vec2::new(20.0, 20.0);
        let end = Vec2::new(21.0, 20.0);
        assert_eq!(
            *log.borrow(),
            vec![
                UiEvent::Drag { pos: start, start },
                UiEvent::DragEnd { pos: end, start },
                UiEvent::Click { pos: end },
            ]
        );
    }

    #[test]
    fn long_drag_does_not_click() {
        let (mut ui, mut root, log) = setup();
        let _ = ui.frame_ref(&mut root, AREA, &input(20.0, 20.0, true), 1.0);
        let _ = ui.frame_ref(&mut root, AREA, &input(60.0, 20.0, true), 1.0);
        let _ = ui.frame_ref(&mut root, AREA, &input(80.0, 20.0, false), 1.0);

        let events = log.borrow();
        assert_eq!(events.len(), 3);
        assert!(!events.iter().any(|e| matches!(e, UiEvent::Click { .. })));
    }

    #[test]
    fn press_over_panel_captures_until_release() {
        let (mut ui, mut root, _) = setup();
        let _ = ui.frame_ref(&mut root, AREA, &input(20.0, 20.0, true), 1.0);
        assert!(ui.captures_pointer());
        let _ = ui.frame_ref(&mut root, AREA, &input(250.0, 250.0, true), 1.0);
        assert!(ui.captures_pointer());
        let _ = ui.frame_ref(&mut root, AREA, &input(250.0, 250.0, false), 1.0);
        assert!(!ui.captures_pointer());
    }

    #[test]
    fn press_outside_panel_is_not_captured() {
        let (mut ui, mut root, _) = setup();
        let _ = ui.frame_ref(&mut root, AREA, &input(250.0, 250.0, true), 1.0);
        assert!(!ui.captures_pointer());
    }
}
