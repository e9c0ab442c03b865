use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use swell_kernel::{FragmentMode, Light, SurfaceColor, VertexUniforms};

/// Per-draw uniform block (192 bytes), matching `DrawUniform` in
/// `surface.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SurfaceUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// `(frequency.x, frequency.y, amplitude.x, amplitude.y)`
    pub wave: [f32; 4],
    pub base_color: [f32; 4],
    /// Normalized light direction in `xyz`, ambient intensity in `w`.
    pub light: [f32; 4],
    pub time: f32,
    pub intensity: f32,
    pub mode: u32,
    _pad: u32,
}

impl SurfaceUniforms {
    pub fn new(
        view_proj: Mat4,
        model: Mat4,
        vertex: &VertexUniforms,
        surface: &SurfaceColor,
        light: &Light,
        mode: FragmentMode,
    ) -> Self {
        let [lx, ly, lz] = light.direction();
        let [r, g, b] = surface.base_color.to_array();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            wave: [
                vertex.frequency.x,
                vertex.frequency.y,
                vertex.amplitude.x,
                vertex.amplitude.y,
            ],
            base_color: [r, g, b, 1.0],
            light: [lx, ly, lz, light.ambient_intensity],
            time: vertex.time,
            intensity: light.intensity,
            mode: mode.as_u32(),
            _pad: 0,
        }
    }
}
