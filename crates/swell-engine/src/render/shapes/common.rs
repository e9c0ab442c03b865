//! GPU types shared by the overlay renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let c = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: c, alpha: c }
}

pub(super) fn overlay_primitive() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2],
}

impl ViewportUniform {
    pub(super) fn from_viewport(v: Viewport) -> Self {
        Self { viewport: [v.width.max(1.0), v.height.max(1.0)], _pad: [0.0; 2] }
    }

    pub(super) fn binding_size() -> Option<std::num::NonZeroU64> {
        std::num::NonZeroU64::new(std::mem::size_of::<Self>() as u64)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Grows an instance buffer to hold `required` items. Capacity doubles, with
/// a floor of 64.
pub(super) fn ensure_instance_buffer<T>(
    device: &wgpu::Device,
    label: &str,
    buffer: &mut Option<wgpu::Buffer>,
    capacity: &mut usize,
    required: usize,
) {
    if required <= *capacity && buffer.is_some() {
        return;
    }
    let new_cap = required.next_power_of_two().max(64);
    *buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (new_cap * std::mem::size_of::<T>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    }));
    *capacity = new_cap;
}
