use crate::color::Rgb;
use crate::uniforms::{Light, SurfaceColor};

/// Which color function the fragment stage evaluates.
///
/// The discriminants are the values written into the GPU uniform block.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FragmentMode {
    /// Emit the base color unmodified.
    #[default]
    Flat = 0,
    /// Polar ripple pattern over the surface uv square.
    Ripple = 1,
    /// Base color under ambient + one directional light.
    Lit = 2,
}

impl FragmentMode {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

/// Interpolated shading basis for one fragment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceSample {
    /// Surface uv in `[0, 1]²`.
    pub uv: [f32; 2],
    /// Unit surface normal (world space).
    pub normal: [f32; 3],
}

impl Default for SurfaceSample {
    fn default() -> Self {
        Self { uv: [0.5, 0.5], normal: [0.0, 1.0, 0.0] }
    }
}

/// Ripple color for a point `u ∈ [-1, 1]²` at time `t`.
///
/// `r = |u|`, `θ = atan2(u.y, u.x)`,
/// `color = (sin(10r + 5t), cos(5θ), sin(3θ))`.
pub fn ripple(u: [f32; 2], t: f32) -> Rgb {
    let r = (u[0] * u[0] + u[1] * u[1]).sqrt();
    let angle = u[1].atan2(u[0]);
    Rgb::new(
        (r * 10.0 + t * 5.0).sin(),
        (angle * 5.0).cos(),
        (angle * 3.0).sin(),
    )
}

/// Fragment stage: returns straight RGBA. Channels are not clamped.
pub fn fragment_stage(
    mode: FragmentMode,
    sample: &SurfaceSample,
    surface: &SurfaceColor,
    light: &Light,
    time: f32,
) -> [f32; 4] {
    let rgb = match mode {
        FragmentMode::Flat => surface.base_color,
        FragmentMode::Ripple => {
            let u = [sample.uv[0] * 2.0 - 1.0, sample.uv[1] * 2.0 - 1.0];
            ripple(u, time)
        }
        FragmentMode::Lit => {
            let l = light.direction();
            let n = sample.normal;
            let diffuse = (n[0] * l[0] + n[1] * l[1] + n[2] * l[2]).max(0.0);
            surface
                .base_color
                .scaled(light.ambient_intensity + light.intensity * diffuse)
        }
    };
    [rgb.r, rgb.g, rgb.b, 1.0]
}
