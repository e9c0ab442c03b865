use crate::color::Rgb;
use crate::fragment::FragmentMode;
use crate::uniforms::{Axes, Light, SurfaceColor, VertexUniforms};

/// Wave axis addressed by a frequency/amplitude edit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Component of a 3D position addressed by a light edit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Vec3Component {
    X,
    Y,
    Z,
}

impl Vec3Component {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Vec3Component::X => 0,
            Vec3Component::Y => 1,
            Vec3Component::Z => 2,
        }
    }
}

/// A single user edit to the uniform block.
///
/// Produced by the debug panel, queued, and applied at the next frame
/// boundary before anything is shaded.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamEvent {
    Frequency(Axis, f32),
    Amplitude(Axis, f32),
    BaseColor(Rgb),
    LightPosition(Vec3Component, f32),
    Wireframe(bool),
    GroundShading(FragmentMode),
}

/// Everything the driver writes before a frame is shaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShadingParams {
    pub vertex: VertexUniforms,
    pub surface: SurfaceColor,
    pub light: Light,
    pub wireframe: bool,
    /// Fragment mode of the ground plane.
    pub ground_mode: GroundMode,
}

/// Ground plane fragment mode; `Ripple` unless switched to `Lit` by the user.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GroundMode(pub FragmentMode);

impl Default for GroundMode {
    fn default() -> Self {
        Self(FragmentMode::Ripple)
    }
}

impl ShadingParams {
    /// Writes the frame time. Time never moves backwards; an older value is
    /// ignored and the current time kept.
    pub fn begin_frame(&mut self, time: f32) {
        if time > self.vertex.time {
            self.vertex.time = time;
        }
    }

    /// Overwrites the single field addressed by `event`.
    pub fn apply(&mut self, event: ParamEvent) {
        match event {
            ParamEvent::Frequency(Axis::X, v) => self.vertex.frequency.x = v,
            ParamEvent::Frequency(Axis::Y, v) => self.vertex.frequency.y = v,
            ParamEvent::Amplitude(Axis::X, v) => self.vertex.amplitude.x = v,
            ParamEvent::Amplitude(Axis::Y, v) => self.vertex.amplitude.y = v,
            ParamEvent::BaseColor(c) => self.surface.base_color = c,
            ParamEvent::LightPosition(c, v) => self.light.position[c.index()] = v,
            ParamEvent::Wireframe(on) => self.wireframe = on,
            ParamEvent::GroundShading(mode) => self.ground_mode = GroundMode(mode),
        }
    }

    /// Applies every event in arrival order. Returns how many were applied.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = ParamEvent>) -> usize {
        let mut n = 0;
        for ev in events {
            self.apply(ev);
            n += 1;
        }
        n
    }

    /// Vertex uniforms with the amplitude zeroed: the undisplaced surface.
    pub fn flat_vertex(&self) -> VertexUniforms {
        VertexUniforms { amplitude: Axes::zero(), ..self.vertex }
    }
}
