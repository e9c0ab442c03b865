/// A single acquired frame.
///
/// Holding the surface texture blocks acquisition of the next one, so the
/// frame is submitted and dropped within the same redraw.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
