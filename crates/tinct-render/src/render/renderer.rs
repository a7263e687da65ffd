use std::collections::HashSet;

use crate::draw::{DrawCmd, DrawData};
use crate::shading::SrgbMode;
use crate::texture::{TextureId, TextureRegistry};
use crate::vertex::Vertex;
use crate::view::{ViewTransform, ViewUniform};

use super::config::RendererConfig;
use super::pipeline::{create_pipeline, texture_bind_group_layout, view_bind_group_layout};
use super::scissor::clip_to_scissor;
use super::{RenderCtx, RenderTarget};

/// Per-frame counters returned by `GuiRenderer::render`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RenderStats {
    /// `draw_indexed` calls issued.
    pub draw_calls: u32,
    /// `Elements` commands dropped (unknown texture, culled clip, bad range).
    pub skipped: u32,
    /// Host callbacks invoked.
    pub callbacks: u32,
}

/// Renders `DrawData` produced by an immediate-mode GUI layer.
///
/// GPU objects are created lazily on the first `render` call. The pipeline
/// is rebuilt when the target format or the `SrgbMode` changes; vertex and
/// index buffers grow to the next power of two and are never shrunk.
pub struct GuiRenderer {
    config: RendererConfig,

    // layouts (stable for the renderer's lifetime)
    view_bgl: Option<wgpu::BindGroupLayout>,
    texture_bgl: Option<wgpu::BindGroupLayout>,
    pipeline_layout: Option<wgpu::PipelineLayout>,

    // pipeline
    pipeline_key: Option<(wgpu::TextureFormat, SrgbMode)>,
    pipeline: Option<wgpu::RenderPipeline>,

    // view uniform
    view_ubo: Option<wgpu::Buffer>,
    view_bind_group: Option<wgpu::BindGroup>,

    // geometry
    vtx_buffer: Option<wgpu::Buffer>,
    vtx_capacity: u64,
    idx_buffer: Option<wgpu::Buffer>,
    idx_capacity: u64,
    vtx_staging: Vec<u8>,
    idx_staging: Vec<u8>,

    warned_textures: HashSet<TextureId>,
    warned_mixed_indices: bool,
}

impl Default for GuiRenderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}

impl GuiRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            view_bgl: None,
            texture_bgl: None,
            pipeline_layout: None,
            pipeline_key: None,
            pipeline: None,
            view_ubo: None,
            view_bind_group: None,
            vtx_buffer: None,
            vtx_capacity: 0,
            idx_buffer: None,
            idx_capacity: 0,
            vtx_staging: Vec::new(),
            idx_staging: Vec::new(),
            warned_textures: HashSet::new(),
            warned_mixed_indices: false,
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    #[inline]
    pub fn srgb_mode(&self) -> SrgbMode {
        self.config.srgb_mode
    }

    /// Switches shader variant; the pipeline is rebuilt on the next render.
    pub fn set_srgb_mode(&mut self, mode: SrgbMode) {
        if self.config.srgb_mode != mode {
            log::debug!("GuiRenderer: srgb mode {:?} -> {:?}", self.config.srgb_mode, mode);
            self.config.srgb_mode = mode;
        }
    }

    /// Records one render pass drawing every list of `draw_data` into `target`.
    ///
    /// Host data problems never panic: unknown textures, culled clips and out
    /// of range index spans skip the command; mixed index widths skip the frame.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_data: &DrawData,
        textures: &mut TextureRegistry,
    ) -> RenderStats {
        let mut stats = RenderStats::default();

        self.ensure_layouts(ctx);
        self.ensure_pipeline(ctx);
        self.ensure_view_bindings(ctx);

        let fb_size = target.clamp_size(draw_data.framebuffer_size());
        let has_geometry = draw_data.total_vtx_count() > 0 && draw_data.total_idx_count() > 0;
        let view = ViewTransform::from_display(draw_data.display_pos, draw_data.display_size);
        let index_format = draw_data.index_format();

        if index_format.is_none() && !self.warned_mixed_indices {
            log::warn!("GuiRenderer: draw lists mix u16 and u32 indices; frame skipped");
            self.warned_mixed_indices = true;
        }

        let drawable = match (view, index_format) {
            (Some(view), Some(format)) if has_geometry && fb_size.x > 0.0 && fb_size.y > 0.0 => {
                self.upload_geometry(ctx, draw_data);
                self.write_view_uniform(ctx, &view);
                Some(format)
            }
            _ => None,
        };

        let load = target.load_op();
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(self.config.label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let Some(index_format) = drawable else { return stats; };

        let Some(pipeline)        = self.pipeline.as_ref()        else { return stats; };
        let Some(view_bind_group) = self.view_bind_group.as_ref() else { return stats; };
        let Some(texture_bgl)     = self.texture_bgl.as_ref()     else { return stats; };
        let Some(vtx_buffer)      = self.vtx_buffer.as_ref()      else { return stats; };
        let Some(idx_buffer)      = self.idx_buffer.as_ref()      else { return stats; };

        let reset = |rpass: &mut wgpu::RenderPass<'_>| {
            rpass.set_pipeline(pipeline);
            rpass.set_vertex_buffer(0, vtx_buffer.slice(..));
            rpass.set_index_buffer(idx_buffer.slice(..), index_format);
            rpass.set_viewport(0.0, 0.0, fb_size.x, fb_size.y, 0.0, 1.0);
            rpass.set_bind_group(0, view_bind_group, &[]);
        };
        reset(&mut rpass);

        let mut vtx_base = 0usize;
        let mut idx_base = 0usize;
        for list in &draw_data.lists {
            for cmd in &list.commands {
                match cmd {
                    DrawCmd::Elements { count, texture, clip_rect, vtx_offset, idx_offset } => {
                        if *count == 0 {
                            continue;
                        }
                        if idx_offset + count > list.indices.len() || *vtx_offset > list.vertices.len() {
                            log::warn!(
                                "GuiRenderer: index span {}..{} out of range for list with {} indices",
                                idx_offset,
                                idx_offset + count,
                                list.indices.len()
                            );
                            stats.skipped += 1;
                            continue;
                        }

                        let Some(tex) = textures.get_mut(*texture) else {
                            if self.warned_textures.insert(*texture) {
                                log::warn!("GuiRenderer: unknown {:?}, skipping", texture);
                            }
                            stats.skipped += 1;
                            continue;
                        };

                        let Some(scissor) = clip_to_scissor(
                            *clip_rect,
                            draw_data.display_pos,
                            draw_data.framebuffer_scale,
                            fb_size,
                        ) else {
                            stats.skipped += 1;
                            continue;
                        };

                        rpass.set_scissor_rect(scissor.x, scissor.y, scissor.width, scissor.height);
                        rpass.set_bind_group(1, tex.bind_group(ctx.device, texture_bgl), &[]);

                        let start = (idx_base + idx_offset) as u32;
                        rpass.draw_indexed(
                            start..start + *count as u32,
                            (vtx_base + vtx_offset) as i32,
                            0..1,
                        );
                        stats.draw_calls += 1;
                    }
                    DrawCmd::ResetRenderState => reset(&mut rpass),
                    DrawCmd::Callback(callback) => {
                        (**callback)(&mut rpass);
                        stats.callbacks += 1;
                    }
                }
            }
            vtx_base += list.vertices.len();
            idx_base += list.indices.len();
        }

        log::trace!("GuiRenderer: {:?}", stats);
        stats
    }

    // ── upload helpers ─────────────────────────────────────────────────────

    fn upload_geometry(&mut self, ctx: &RenderCtx<'_>, draw_data: &DrawData) {
        let vtx_size = aligned_size(draw_data.total_vtx_count() * std::mem::size_of::<Vertex>());
        let idx_size = aligned_size(draw_data.lists.iter().map(|l| l.indices.as_bytes().len()).sum());

        self.ensure_vertex_capacity(ctx, vtx_size);
        self.ensure_index_capacity(ctx, idx_size);

        self.vtx_staging.clear();
        self.idx_staging.clear();
        for list in &draw_data.lists {
            self.vtx_staging.extend_from_slice(bytemuck::cast_slice(&list.vertices));
            self.idx_staging.extend_from_slice(list.indices.as_bytes());
        }
        self.vtx_staging.resize(vtx_size as usize, 0);
        self.idx_staging.resize(idx_size as usize, 0);

        if let Some(buf) = self.vtx_buffer.as_ref() {
            ctx.queue.write_buffer(buf, 0, &self.vtx_staging);
        }
        if let Some(buf) = self.idx_buffer.as_ref() {
            ctx.queue.write_buffer(buf, 0, &self.idx_staging);
        }
    }

    fn write_view_uniform(&mut self, ctx: &RenderCtx<'_>, view: &ViewTransform) {
        let Some(ubo) = self.view_ubo.as_ref() else { return; };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&view.uniform()));
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_layouts(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_layout.is_some() {
            return;
        }
        let label = self.config.label;
        let view_bgl = view_bind_group_layout(ctx.device, label);
        let texture_bgl = texture_bind_group_layout(ctx.device, label);
        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[&view_bgl, &texture_bgl],
            immediate_size: 0,
        });

        self.view_bgl = Some(view_bgl);
        self.texture_bgl = Some(texture_bgl);
        self.pipeline_layout = Some(pipeline_layout);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        let key = (ctx.surface_format, self.config.srgb_mode);
        if self.pipeline_key == Some(key) && self.pipeline.is_some() {
            return;
        }
        let Some(layout) = self.pipeline_layout.as_ref() else { return; };

        log::debug!(
            "GuiRenderer: building pipeline for {:?} ({:?})",
            ctx.surface_format,
            self.config.srgb_mode
        );
        if self.config.srgb_mode == SrgbMode::Srgb && ctx.surface_format.is_srgb() {
            log::debug!(
                "GuiRenderer: sRGB target {:?} will encode the gamma-adjusted output again",
                ctx.surface_format
            );
        }

        self.pipeline = Some(create_pipeline(ctx.device, layout, ctx.surface_format, self.config.srgb_mode));
        self.pipeline_key = Some(key);
    }

    fn ensure_view_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.view_bind_group.is_some() && self.view_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.view_bgl.as_ref() else { return; };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(self.config.label),
            size: ViewUniform::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(self.config.label),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.view_ubo = Some(ubo);
        self.view_bind_group = Some(bind_group);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: u64) {
        if required <= self.vtx_capacity && self.vtx_buffer.is_some() {
            return;
        }
        let cap = grown_capacity(required, self.config.initial_buffer_size);
        self.vtx_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(self.config.label),
            size: cap,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vtx_capacity = cap;
        log::debug!("GuiRenderer: vertex buffer grown to {cap} bytes");
    }

    fn ensure_index_capacity(&mut self, ctx: &RenderCtx<'_>, required: u64) {
        if required <= self.idx_capacity && self.idx_buffer.is_some() {
            return;
        }
        let cap = grown_capacity(required, self.config.initial_buffer_size);
        self.idx_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(self.config.label),
            size: cap,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.idx_capacity = cap;
        log::debug!("GuiRenderer: index buffer grown to {cap} bytes");
    }
}

/// Rounds `bytes` up to `COPY_BUFFER_ALIGNMENT`.
fn aligned_size(bytes: usize) -> u64 {
    let align = wgpu::COPY_BUFFER_ALIGNMENT;
    (bytes as u64).div_ceil(align) * align
}

fn grown_capacity(required: u64, floor: u64) -> u64 {
    required.next_power_of_two().max(aligned_size(floor as usize)).max(wgpu::COPY_BUFFER_ALIGNMENT)
}
