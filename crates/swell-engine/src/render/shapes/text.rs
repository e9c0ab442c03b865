use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};
use wgpu::util::DeviceExt;

use crate::render::ctx::load_color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use super::common::{
    ensure_instance_buffer, overlay_primitive, premul_alpha_blend, QuadVertex, ViewportUniform,
    QUAD_INDICES, QUAD_VERTICES,
};

const ATLAS_SIZE: u32 = 2048;
const GLYPH_PADDING: u32 = 1;

struct CachedGlyph {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

/// Shelf packer for the glyph atlas. Rows are filled left to right; a glyph
/// that does not fit starts a new row below the tallest glyph so far.
#[derive(Debug)]
struct ShelfPacker {
    size: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl ShelfPacker {
    fn new(size: u32) -> Self {
        Self {
            size,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
            full: false,
        }
    }

    /// Reserves a `w`×`h` slot and returns its top-left, or `None` when full.
    fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full {
            return None;
        }

        if self.cursor_x + w + GLYPH_PADDING > self.size {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }

        if self.cursor_y + h + GLYPH_PADDING > self.size || w + 2 * GLYPH_PADDING > self.size {
            self.full = true;
            return None;
        }

        let slot = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(slot)
    }
}

/// Renderer for `DrawCmd::Text`.
///
/// Glyphs are rasterized by fontdue at `size × scale_factor`, cached in a
/// 2048² R8Unorm atlas keyed by `GlyphRasterConfig`, and drawn as instanced
/// quads placed back in logical pixels.
pub struct TextRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    sampler: Option<wgpu::Sampler>,

    atlas_texture: Option<wgpu::Texture>,
    atlas_view: Option<wgpu::TextureView>,
    packer: ShelfPacker,

    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,
    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,

    layout: Layout<()>,
    instances: Vec<GlyphInstance>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            viewport_ubo: None,
            sampler: None,
            atlas_texture: None,
            atlas_view: None,
            packer: ShelfPacker::new(ATLAS_SIZE),
            glyph_cache: HashMap::new(),
            quad_vbo: None,
            quad_ibo: None,
            instance_vbo: None,
            instance_capacity: 0,
            layout: Layout::new(CoordinateSystem::PositiveYDown),
            instances: Vec::new(),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all `DrawCmd::Text` entries in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        font_system: &FontSystem,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_atlas(ctx);

        let scale = ctx.scale_factor.max(0.01);
        self.instances.clear();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Text(cmd) = &item.cmd else { continue; };
            let Some(font) = font_system.get(cmd.font) else {
                log::warn!("unknown {:?}, skipping text", cmd.font);
                continue;
            };

            let color = cmd.color.to_array();

            self.layout.reset(&LayoutSettings {
                x: cmd.origin.x * scale,
                y: cmd.origin.y * scale,
                ..LayoutSettings::default()
            });
            self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size * scale, 0));

            for g in self.layout.glyphs() {
                if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                    continue;
                }

                if !self.glyph_cache.contains_key(&g.key) {
                    let (metrics, bitmap) = font.rasterize_config(g.key);
                    let (w, h) = (metrics.width as u32, metrics.height as u32);
                    let Some((gx, gy)) = self.packer.place(w, h) else {
                        log::warn!("glyph atlas is full; some glyphs will not be drawn");
                        continue;
                    };
                    let Some(atlas) = self.atlas_texture.as_ref() else { continue; };
                    upload_glyph(ctx.queue, atlas, &bitmap, gx, gy, w, h);

                    let atlas_f = ATLAS_SIZE as f32;
                    self.glyph_cache.insert(g.key, CachedGlyph {
                        uv_min: [gx as f32 / atlas_f, gy as f32 / atlas_f],
                        uv_max: [(gx + w) as f32 / atlas_f, (gy + h) as f32 / atlas_f],
                    });
                }

                let Some(cached) = self.glyph_cache.get(&g.key) else { continue; };

                // Snap to physical pixels, then back to logical for the shader.
                let x0 = g.x.round() / scale;
                let y0 = g.y.round() / scale;
                self.instances.push(GlyphInstance {
                    dst_min: [x0, y0],
                    dst_max: [x0 + g.width as f32 / scale, y0 + g.height as f32 / scale],
                    uv_min: cached.uv_min,
                    uv_max: cached.uv_max,
                    color,
                });
            }
        }

        if self.instances.is_empty() {
            return;
        }

        self.ensure_sampler(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);
        ensure_instance_buffer::<GlyphInstance>(
            ctx.device,
            "swell text instance vbo",
            &mut self.instance_vbo,
            &mut self.instance_capacity,
            self.instances.len(),
        );

        let (Some(pipeline), Some(bind_group), Some(ubo), Some(quad_vbo), Some(quad_ibo), Some(instance_vbo)) = (
            self.pipeline.as_ref(),
            self.bind_group.as_ref(),
            self.viewport_ubo.as_ref(),
            self.quad_vbo.as_ref(),
            self.quad_ibo.as_ref(),
            self.instance_vbo.as_ref(),
        ) else {
            return;
        };

        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_viewport(ctx.viewport)));
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&self.instances));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("swell text pass"),
            color_attachments: &[Some(load_color(target.color_view))],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, 0..self.instances.len() as u32);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("swell text shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("swell text bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: ViewportUniform::binding_size(),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("swell text pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("swell text pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), GlyphInstance::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: overlay_primitive(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_atlas(&mut self, ctx: &RenderCtx<'_>) {
        if self.atlas_texture.is_some() {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("swell text atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.atlas_view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.atlas_texture = Some(texture);
        self.packer = ShelfPacker::new(ATLAS_SIZE);
        self.glyph_cache.clear();
        self.bind_group = None;
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("swell text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }

        let Some(bgl) = self.bind_group_layout.as_ref() else { return; };
        let Some(atlas_view) = self.atlas_view.as_ref() else { return; };
        let Some(sampler) = self.sampler.as_ref() else { return; };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("swell text viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("swell text bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: viewport_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }
        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("swell text quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("swell text quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

fn upload_glyph(queue: &wgpu::Queue, atlas: &wgpu::Texture, bitmap: &[u8], x: u32, y: u32, w: u32, h: u32) {
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: atlas,
            mip_level: 0,
            origin: wgpu::Origin3d { x, y, z: 0 },
            aspect: wgpu::TextureAspect::All,
        },
        bitmap,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(w),
            rows_per_image: Some(h),
        },
        wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
    );
}

/// Instance data layout (48 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  uv_min   [f32; 2]   loc 3
///  offset 24  uv_max   [f32; 2]   loc 4
///  offset 32  color    [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packer_fills_rows_left_to_right() {
        let mut p = ShelfPacker::new(64);
        assert_eq!(p.place(10, 8), Some((1, 1)));
        assert_eq!(p.place(10, 12), Some((12, 1)));
    }

    #[test]
    fn packer_wraps_below_tallest_glyph() {
        let mut p = ShelfPacker::new(32);
        assert_eq!(p.place(20, 5), Some((1, 1)));
        assert_eq!(p.place(8, 9), Some((22, 1)));
        // 31 + 5 + 1 > 32: next row starts under the 9-px glyph.
        assert_eq!(p.place(5, 4), Some((1, 11)));
    }

    #[test]
    fn packer_reports_full_and_stays_full() {
        let mut p = ShelfPacker::new(16);
        assert!(p.place(14, 14).is_some());
        assert_eq!(p.place(4, 4), None);
        assert_eq!(p.place(1, 1), None);
    }

    #[test]
    fn oversized_glyph_is_rejected() {
        let mut p = ShelfPacker::new(16);
        assert_eq!(p.place(40, 2), None);
    }
}
