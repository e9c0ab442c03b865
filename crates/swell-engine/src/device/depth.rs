use winit::dpi::PhysicalSize;

/// Depth format shared by every pipeline that draws into the frame.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Depth buffer sized to the surface.
pub struct DepthTarget {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
    size: PhysicalSize<u32>,
}

impl DepthTarget {
    pub fn new(device: &wgpu::Device, size: PhysicalSize<u32>) -> Self {
        let width = size.width.max(1);
        let height = size.height.max(1);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("swell depth"),
            size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { _texture: texture, view, size: PhysicalSize::new(width, height) }
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Recreates the texture when `size` differs. Zero sizes are ignored.
    pub fn resize(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 || size == self.size {
            return;
        }
        log::debug!("depth target resized to {}x{}", size.width, size.height);
        *self = Self::new(device, size);
    }
}
