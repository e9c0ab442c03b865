use crate::color::Rgb;

/// A per-axis pair of scalars (frequency or amplitude).
///
/// The two components are independent; nothing couples `x` to `y`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Axes {
    pub x: f32,
    pub y: f32,
}

impl Axes {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// Per-frame inputs of the vertex stage.
///
/// Written once per frame by the driver, read-only while the frame is shaded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexUniforms {
    /// Spatial frequency of the wave along each local axis.
    pub frequency: Axes,
    /// Peak displacement contributed by each axis.
    pub amplitude: Axes,
    /// Seconds since program start.
    pub time: f32,
}

impl Default for VertexUniforms {
    fn default() -> Self {
        Self {
            frequency: Axes::new(20.0, 0.2),
            amplitude: Axes::new(0.3, 0.1),
            time: 0.0,
        }
    }
}

/// Base color consumed by the fragment stage.
///
/// Only changes in response to a user edit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceColor {
    pub base_color: Rgb,
}

impl Default for SurfaceColor {
    fn default() -> Self {
        Self { base_color: Rgb::new(1.0, 0.0, 0.0) }
    }
}

/// Scene lighting used by the lit fragment mode.
///
/// Ambient white light plus one directional light pointing from `position`
/// towards the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    pub ambient_intensity: f32,
    pub position: [f32; 3],
    pub intensity: f32,
}

impl Light {
    /// Unit vector from the surface towards the light.
    ///
    /// A light placed at the origin has no direction; straight up is used.
    pub fn direction(&self) -> [f32; 3] {
        let [x, y, z] = self.position;
        let len = (x * x + y * y + z * z).sqrt();
        if len <= f32::EPSILON {
            [0.0, 1.0, 0.0]
        } else {
            [x / len, y / len, z / len]
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.5,
            position: [0.25, 2.0, 2.25],
            intensity: 1.0,
        }
    }
}
