//! Debug panel: the widget tree and its wiring to `ParamEvent`s.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::mpsc::Sender;

use swell_kernel::{Axis, FragmentMode, ParamEvent, ShadingParams, Vec3Component};
use swell_ui::prelude::*;

const TEXT_SIZE: f32 = 12.0;
const PANEL_WIDTH: f32 = 300.0;

/// State the app shares with the panel outside of events.
pub struct PanelBindings {
    /// Wireframe switch; also flipped by the `W` key.
    pub wireframe: Rc<Cell<bool>>,
    /// FPS readout text, rewritten by the app.
    pub fps: Rc<RefCell<String>>,
}

/// Pushes `event` to the frame loop. A closed queue means the app is
/// shutting down, so the edit is dropped.
fn emit(tx: &Sender<ParamEvent>, event: ParamEvent) {
    if tx.send(event).is_err() {
        log::debug!("parameter queue closed; edit dropped");
    }
}

fn slider_row(
    label: &str,
    font: FontId,
    (min, max, step): (f32, f32, f32),
    value: f32,
    tx: &Sender<ParamEvent>,
    make: impl Fn(f32) -> ParamEvent + 'static,
) -> Labeled {
    let tx = tx.clone();
    let slider = Slider::new(min, max)
        .step(step)
        .value(value)
        .on_change(move |v| emit(&tx, make(v)));
    Labeled::new(label, font, slider)
}

fn axis_folder(title: &str, axis: Axis, font: FontId, params: &ShadingParams, tx: &Sender<ParamEvent>) -> Folder {
    let (freq, amp) = match axis {
        Axis::X => (params.vertex.frequency.x, params.vertex.amplitude.x),
        Axis::Y => (params.vertex.frequency.y, params.vertex.amplitude.y),
    };
    Folder::new(title, font)
        .expanded(true)
        .child(slider_row("Frequency", font, (0.0, 20.0, 0.1), freq, tx, move |v| {
            ParamEvent::Frequency(axis, v)
        }))
        .child(slider_row("Amplitude", font, (0.0, 5.0, 0.01), amp, tx, move |v| {
            ParamEvent::Amplitude(axis, v)
        }))
}

fn light_folder(font: FontId, params: &ShadingParams, tx: &Sender<ParamEvent>) -> Folder {
    let mut folder = Folder::new("Directional Light", font);
    for (name, c) in [("x", Vec3Component::X), ("y", Vec3Component::Y), ("z", Vec3Component::Z)] {
        let value = params.light.position[c.index()];
        folder = folder.child(slider_row(name, font, (-100.0, 100.0, 1.0), value, tx, move |v| {
            ParamEvent::LightPosition(c, v)
        }));
    }
    folder
}

fn toggle_row(label: &str, font: FontId, toggle: Toggle) -> Labeled {
    Labeled::new(label, font, toggle)
}

/// Builds the panel tree. Every control starts at the value in `params` and
/// sends its edits through `tx`.
pub fn build_panel(font: FontId, params: &ShadingParams, tx: Sender<ParamEvent>) -> (Element, PanelBindings) {
    let wireframe = Rc::new(Cell::new(params.wireframe));
    let fps = Rc::new(RefCell::new(String::from("fps: --")));
    let text_color = Color::from_srgb_u8(0x8a, 0x8b, 0x93, 0xff);

    let wire_tx = tx.clone();
    let wire_toggle = Toggle::new()
        .bind(wireframe.clone())
        .on_change(move |on| emit(&wire_tx, ParamEvent::Wireframe(on)));

    let ground_tx = tx.clone();
    let ground_toggle = Toggle::new()
        .checked(params.ground_mode.0 == FragmentMode::Lit)
        .on_change(move |lit| {
            let mode = if lit { FragmentMode::Lit } else { FragmentMode::Ripple };
            emit(&ground_tx, ParamEvent::GroundShading(mode));
        });

    let color_tx = tx.clone();
    let color = ColorField::new("Color", font, params.surface.base_color)
        .on_change(move |rgb| emit(&color_tx, ParamEvent::BaseColor(rgb)));

    let body = Column::new()
        .spacing(6.0)
        .child(light_folder(font, params, &tx))
        .child(axis_folder("X", Axis::X, font, params, &tx))
        .child(toggle_row("Wireframe", font, wire_toggle))
        .child(axis_folder("Y", Axis::Y, font, params, &tx))
        .child(color)
        .child(toggle_row("Lit ground", font, ground_toggle))
        .child(Text::shared(fps.clone(), font, TEXT_SIZE, text_color));

    let root = Container::new()
        .width(PANEL_WIDTH)
        .padding(Edges::all(8.0))
        .background(Color::from_srgb_u8(0x1a, 0x1b, 0x1e, 0xf0))
        .corner_radius(4.0)
        .child(body);

    (root.into(), PanelBindings { wireframe, fps })
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use swell_engine::text::FontSystem;
    use swell_kernel::Rgb;

    fn input(x: f32, y: f32, pressed: bool) -> UiInput {
        UiInput { mouse_pos: Vec2::new(x, y), mouse_pressed: pressed }
    }

    #[test]
    fn clicking_light_header_expands_the_folder() {
        let (tx, rx) = mpsc::channel();
        let (mut root, _) = build_panel(FontId::default(), &ShadingParams::default(), tx);
        let mut scene = UiScene::new(FontSystem::new());
        let area = Rect::new(0.0, 0.0, 1280.0, 720.0);

        scene.frame_ref(&mut root, area, &input(-1.0, -1.0, false), 1.0);
        let collapsed = scene.root_rect().size.y;

        // Padding is 8; the first folder header starts right below it.
        scene.frame_ref(&mut root, area, &input(20.0, 14.0, true), 1.0);
        scene.frame_ref(&mut root, area, &input(20.0, 14.0, false), 1.0);
        scene.frame_ref(&mut root, area, &input(-1.0, -1.0, false), 1.0);

        assert!(scene.root_rect().size.y > collapsed);
        assert!(rx.try_recv().is_err());
    }

    struct Driver {
        root: Element,
        scene: UiScene,
        area: Rect,
    }

    impl Driver {
        fn frame(&mut self, x: f32, y: f32, pressed: bool) {
            self.scene.frame_ref(&mut self.root, self.area, &input(x, y, pressed), 1.0);
        }

        fn click(&mut self, x: f32, y: f32) {
            self.frame(x, y, true);
            self.frame(x, y, false);
        }

        fn drag(&mut self, from: (f32, f32), to_x: f32) {
            self.frame(from.0, from.1, true);
            self.frame(to_x, from.1, true);
            self.frame(to_x, from.1, false);
        }
    }

    fn last(rx: &mpsc::Receiver<ParamEvent>) -> Option<ParamEvent> {
        rx.try_iter().last()
    }

    #[test]
    fn every_control_sends_its_param_event() {
        let (tx, rx) = mpsc::channel();
        let (root, _) = build_panel(FontId::default(), &ShadingParams::default(), tx);
        let mut ui = Driver {
            root,
            scene: UiScene::new(FontSystem::new()),
            area: Rect::new(0.0, 0.0, 1280.0, 720.0),
        };
        ui.frame(-1.0, -1.0, false);

        // Row centers with the light folder open: folder rows are 20 tall with
        // 4 between, folder bodies start 6 below a 24 tall header, and panel
        // children are 6 apart inside 8 of padding. Folder sliders span
        // x 98..242.
        ui.click(20.0, 14.0);
        assert!(rx.try_recv().is_err());

        ui.drag((170.0, 48.0), 1000.0);
        assert_eq!(last(&rx), Some(ParamEvent::LightPosition(Vec3Component::X, 100.0)));
        ui.drag((170.0, 72.0), -1000.0);
        assert_eq!(last(&rx), Some(ParamEvent::LightPosition(Vec3Component::Y, -100.0)));
        ui.drag((170.0, 96.0), 1000.0);
        assert_eq!(last(&rx), Some(ParamEvent::LightPosition(Vec3Component::Z, 100.0)));

        ui.drag((170.0, 152.0), -1000.0);
        assert_eq!(last(&rx), Some(ParamEvent::Frequency(Axis::X, 0.0)));
        ui.drag((170.0, 176.0), 1000.0);
        assert_eq!(last(&rx), Some(ParamEvent::Amplitude(Axis::X, 5.0)));

        ui.drag((170.0, 258.0), 1000.0);
        assert_eq!(last(&rx), Some(ParamEvent::Frequency(Axis::Y, 20.0)));
        ui.drag((170.0, 282.0), 1000.0);
        assert_eq!(last(&rx), Some(ParamEvent::Amplitude(Axis::Y, 5.0)));

        // Green channel row of the color field.
        ui.drag((150.0, 350.0), 1000.0);
        assert_eq!(last(&rx), Some(ParamEvent::BaseColor(Rgb::new(1.0, 1.0, 0.0))));

        ui.click(100.0, 394.0);
        assert_eq!(last(&rx), Some(ParamEvent::GroundShading(FragmentMode::Lit)));
        ui.click(100.0, 394.0);
        assert_eq!(last(&rx), Some(ParamEvent::GroundShading(FragmentMode::Ripple)));
    }

    #[test]
    fn wireframe_toggle_sends_and_updates_the_cell() {
        let (tx, rx) = mpsc::channel();
        let (root, bindings) = build_panel(FontId::default(), &ShadingParams::default(), tx);
        let mut ui = Driver {
            root,
            scene: UiScene::new(FontSystem::new()),
            area: Rect::new(0.0, 0.0, 1280.0, 720.0),
        };
        ui.frame(-1.0, -1.0, false);

        // Collapsed light folder: the wireframe row sits at y 118..138.
        ui.click(100.0, 128.0);
        assert_eq!(last(&rx), Some(ParamEvent::Wireframe(true)));
        assert!(bindings.wireframe.get());
    }

    #[test]
    fn wireframe_cell_follows_params() {
        let (tx, _rx) = mpsc::channel();
        let params = ShadingParams { wireframe: true, ..ShadingParams::default() };
        let (_, bindings) = build_panel(FontId::default(), &params, tx);
        assert!(bindings.wireframe.get());
        assert_eq!(bindings.fps.borrow().as_str(), "fps: --");
    }
}
