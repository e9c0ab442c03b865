use crate::device::DEPTH_FORMAT;
use crate::mesh::MeshVertex;
use crate::render::ctx::load_color;
use crate::render::{RenderCtx, RenderTarget};

use super::{GpuMesh, SurfaceUniforms};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum DrawStyle {
    /// Filled triangles, both faces visible.
    #[default]
    Fill,
    /// Triangle edges as lines, in place of the fill.
    Wireframe,
}

/// One mesh draw with its own uniform block.
pub struct SurfaceDraw<'a> {
    pub mesh: &'a GpuMesh,
    pub uniforms: SurfaceUniforms,
    pub style: DrawStyle,
}

struct UniformSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Draws displaced meshes with depth testing.
///
/// Each draw gets its own uniform buffer from a pool that grows to the
/// largest draw count seen, so every upload lands before the pass is
/// recorded.
#[derive(Default)]
pub struct SurfaceRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    fill_pipeline: Option<wgpu::RenderPipeline>,
    line_pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    slots: Vec<UniformSlot>,
}

impl SurfaceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draws: &[SurfaceDraw<'_>]) {
        if draws.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_slots(ctx, draws.len());

        for (slot, draw) in self.slots.iter().zip(draws) {
            ctx.queue.write_buffer(&slot.buffer, 0, bytemuck::bytes_of(&draw.uniforms));
        }

        let (Some(fill), Some(line)) = (self.fill_pipeline.as_ref(), self.line_pipeline.as_ref()) else {
            return;
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("swell surface pass"),
            color_attachments: &[Some(load_color(target.color_view))],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for (slot, draw) in self.slots.iter().zip(draws) {
            let mesh = draw.mesh;
            rpass.set_bind_group(0, &slot.bind_group, &[]);
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));

            match draw.style {
                DrawStyle::Fill => {
                    rpass.set_pipeline(fill);
                    rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
                }
                DrawStyle::Wireframe => {
                    rpass.set_pipeline(line);
                    rpass.set_index_buffer(mesh.edge_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.edge_index_count, 0, 0..1);
                }
            }
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.fill_pipeline.is_some()
            && self.line_pipeline.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("swell surface shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/surface.wgsl").into()),
        });

        let bind_group_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("swell surface bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<SurfaceUniforms>() as u64),
                },
                count: None,
            }],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("swell surface pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let build = |label: &str, topology: wgpu::PrimitiveTopology| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[MeshVertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        let fill = build("swell surface fill pipeline", wgpu::PrimitiveTopology::TriangleList);
        let line = build("swell surface line pipeline", wgpu::PrimitiveTopology::LineList);

        log::debug!("surface pipelines built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.fill_pipeline = Some(fill);
        self.line_pipeline = Some(line);
        self.bind_group_layout = Some(bind_group_layout);
        // Bind groups reference the old layout.
        self.slots.clear();
    }

    fn ensure_slots(&mut self, ctx: &RenderCtx<'_>, count: usize) {
        let Some(bgl) = self.bind_group_layout.as_ref() else { return; };

        while self.slots.len() < count {
            let index = self.slots.len();
            let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&format!("swell surface ubo {index}")),
                size: std::mem::size_of::<SurfaceUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("swell surface bind group {index}")),
                layout: bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
            self.slots.push(UniformSlot { buffer, bind_group });
        }
    }
}
