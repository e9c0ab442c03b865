use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use glam::Vec3;
use swell_engine::camera::OrbitCamera;
use swell_engine::core::{App, AppControl, FrameCtx};
use swell_engine::input::{InputFrame, InputState, Key, MouseButton};
use swell_engine::render::shapes::{RoundedRectRenderer, TextRenderer};
use swell_engine::render::surface::SurfaceRenderer;
use swell_engine::text::FontSystem;
use swell_engine::time::FpsCounter;
use swell_kernel::{ParamEvent, ShadingParams};
use swell_ui::prelude::*;

use crate::panel::{build_panel, PanelBindings};
use crate::scene::SceneMeshes;

const PANEL_MARGIN: f32 = 12.0;

fn initial_camera() -> OrbitCamera {
    OrbitCamera::new(Vec3::new(0.0, 1.0, 0.0), 9.5).with_angles(0.0, 0.32)
}

/// The demo: owns the uniform block, the camera, the panel and the
/// renderers.
pub struct StudioApp {
    params: ShadingParams,
    events_tx: Sender<ParamEvent>,
    events_rx: Receiver<ParamEvent>,

    camera: OrbitCamera,

    ui: UiScene,
    panel: Element,
    bindings: PanelBindings,
    show_panel: bool,
    fps: FpsCounter,

    meshes: Option<SceneMeshes>,
    surface: SurfaceRenderer,
    rects: RoundedRectRenderer,
    text: TextRenderer,
}

impl StudioApp {
    pub fn new(fonts: FontSystem, font: FontId) -> Self {
        let params = ShadingParams::default();
        let (events_tx, events_rx) = mpsc::channel();
        let (panel, bindings) = build_panel(font, &params, events_tx.clone());
        Self {
            params,
            events_tx,
            events_rx,
            camera: initial_camera(),
            ui: UiScene::new(fonts),
            panel,
            bindings,
            show_panel: true,
            fps: FpsCounter::new(Duration::from_millis(500)),
            meshes: None,
            surface: SurfaceRenderer::default(),
            rects: RoundedRectRenderer::new(),
            text: TextRenderer::new(),
        }
    }

    /// Escape quits, W flips wireframe, R resets the camera, H hides the
    /// panel.
    fn handle_keys(&mut self, frame: &InputFrame) -> AppControl {
        if frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }
        if frame.key_pressed(Key::W) {
            let on = !self.bindings.wireframe.get();
            self.bindings.wireframe.set(on);
            // Goes through the queue like a panel edit.
            if self.events_tx.send(ParamEvent::Wireframe(on)).is_err() {
                log::debug!("parameter queue closed");
            }
        }
        if frame.key_pressed(Key::R) {
            self.camera.reset();
        }
        if frame.key_pressed(Key::H) {
            self.show_panel = !self.show_panel;
            log::debug!("panel visible: {}", self.show_panel);
        }
        AppControl::Continue
    }

    /// Drag orbits and the wheel zooms, unless the panel owns the pointer.
    fn drive_camera(&mut self, input: &InputState, frame: &InputFrame) {
        let over_panel = self.show_panel
            && input
                .pointer_pos
                .is_some_and(|(x, y)| self.ui.hit(Vec2::new(x, y)));
        let captured = self.show_panel && self.ui.captures_pointer();

        if input.button_down(MouseButton::Left) && !captured {
            let (dx, dy) = frame.pointer_delta;
            self.camera.rotate(dx, dy);
        }
        if frame.wheel_lines != 0.0 && !over_panel {
            self.camera.zoom(frame.wheel_lines);
        }
        self.camera.update();
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let applied = self.params.apply_all(self.events_rx.try_iter());
        if applied > 0 {
            log::trace!("applied {applied} parameter edits");
        }
        self.params.begin_frame(ctx.time.elapsed);

        if self.handle_keys(ctx.input_frame) == AppControl::Exit {
            return AppControl::Exit;
        }

        if let Some(fps) = self.fps.record(ctx.time.now) {
            *self.bindings.fps.borrow_mut() = format!("fps: {fps:.0}");
        }

        let (w, h) = ctx.window.logical_size();
        if self.show_panel {
            let area = Rect::new(
                PANEL_MARGIN,
                PANEL_MARGIN,
                (w - 2.0 * PANEL_MARGIN).max(0.0),
                (h - 2.0 * PANEL_MARGIN).max(0.0),
            );
            let input = UiInput::from_state(ctx.input);
            self.ui.frame_ref(&mut self.panel, area, &input, ctx.window.scale_factor());
        } else {
            self.ui.draw_list.clear();
        }

        self.drive_camera(ctx.input, ctx.input_frame);

        let view_proj = self.camera.view_proj(w / h.max(1.0));
        let meshes = self
            .meshes
            .get_or_insert_with(|| SceneMeshes::upload(ctx.gpu.device()));
        let draws = meshes.draws(&self.params, view_proj);

        let (surface, rects, text, ui) = (&mut self.surface, &mut self.rects, &mut self.text, &mut self.ui);
        ctx.render(Color::from_srgb_u8(0x10, 0x11, 0x14, 0xff), |rctx, target| {
            surface.render(rctx, target, &draws);
            rects.render(rctx, target, &mut ui.draw_list);
            text.render(rctx, target, &mut ui.draw_list, &ui.font_system);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> StudioApp {
        StudioApp::new(FontSystem::new(), FontId::default())
    }

    fn pressed(key: Key) -> InputFrame {
        let mut frame = InputFrame::default();
        frame.keys_pressed.insert(key);
        frame
    }

    #[test]
    fn w_key_queues_a_wireframe_edit() {
        let mut app = app();
        assert_eq!(app.handle_keys(&pressed(Key::W)), AppControl::Continue);
        assert!(app.bindings.wireframe.get());

        let n = app.params.apply_all(app.events_rx.try_iter());
        assert_eq!(n, 1);
        assert!(app.params.wireframe);
    }

    #[test]
    fn escape_exits_and_h_hides_panel() {
        let mut app = app();
        assert_eq!(app.handle_keys(&pressed(Key::Escape)), AppControl::Exit);
        app.handle_keys(&pressed(Key::H));
        assert!(!app.show_panel);
    }

    #[test]
    fn r_key_restores_the_initial_framing() {
        let mut app = app();
        app.camera = app.camera.clone().with_damping(0.0);
        app.camera.rotate(120.0, -40.0);
        app.camera.update();
        app.handle_keys(&pressed(Key::R));
        let home = initial_camera();
        assert!((app.camera.yaw() - home.yaw()).abs() < 1e-6);
        assert!((app.camera.pitch() - home.pitch()).abs() < 1e-6);
        assert!((app.camera.distance() - home.distance()).abs() < 1e-6);
    }

    #[test]
    fn camera_ignores_drags_owned_by_the_panel() {
        let mut app = app();
        app.camera = app.camera.clone().with_damping(0.0);
        let yaw = app.camera.yaw();

        let mut input = InputState::default();
        input.pointer_pos = Some((20.0, 20.0));
        input.buttons_down.insert(MouseButton::Left);

        // Press lands on the panel.
        let area = Rect::new(0.0, 0.0, 800.0, 600.0);
        app.ui.frame_ref(&mut app.panel, area, &UiInput::from_state(&input), 1.0);
        assert!(app.ui.captures_pointer());

        let frame = InputFrame { pointer_delta: (50.0, 0.0), ..InputFrame::default() };
        app.drive_camera(&input, &frame);
        assert_eq!(app.camera.yaw(), yaw);
    }
}
