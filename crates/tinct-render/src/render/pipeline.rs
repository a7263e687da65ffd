//! Shader, layouts and pipeline for the GUI pass.

use crate::shading::SrgbMode;
use crate::vertex::Vertex;
use crate::view::ViewUniform;

// ── shader + blend ────────────────────────────────────────────────────────

/// WGSL source of the variant selected by `mode`.
pub fn shader_source(mode: SrgbMode) -> &'static str {
    match mode {
        SrgbMode::None => include_str!("shaders/gui.wgsl"),
        SrgbMode::Srgb => include_str!("shaders/gui_srgb.wgsl"),
    }
}

/// Blend state the fragment output of `mode` is designed for.
///
/// The sRGB variant already multiplies color by coverage, so the source color
/// factor is `One` and the shader's alpha replaces the destination alpha.
pub fn blend_state(mode: SrgbMode) -> wgpu::BlendState {
    let over = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    match mode {
        SrgbMode::Srgb => wgpu::BlendState {
            color: over,
            alpha: wgpu::BlendComponent::REPLACE,
        },
        SrgbMode::None => wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                ..over
            },
            alpha: over,
        },
    }
}

// ── layouts ───────────────────────────────────────────────────────────────

/// Group 0: view uniform, vertex stage only.
pub(super) fn view_bind_group_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(&format!("{label} view bgl")),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(ViewUniform::min_binding_size()),
            },
            count: None,
        }],
    })
}

/// Group 1: texture + filtering sampler, fragment stage only.
pub(super) fn texture_bind_group_layout(
    device: &wgpu::Device,
    label: &str,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(&format!("{label} texture bgl")),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

// ── pipeline ──────────────────────────────────────────────────────────────

pub(super) fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
    mode: SrgbMode,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(mode.label()),
        source: wgpu::ShaderSource::Wgsl(shader_source(mode).into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(mode.label()),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(blend_state(mode)),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_blend_is_premultiplied_over_with_alpha_replace() {
        let b = blend_state(SrgbMode::Srgb);
        assert_eq!(b.color.src_factor, wgpu::BlendFactor::One);
        assert_eq!(b.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
        assert_eq!(b.alpha, wgpu::BlendComponent::REPLACE);
    }

    #[test]
    fn plain_blend_is_straight_alpha_over() {
        let b = blend_state(SrgbMode::None);
        assert_eq!(b.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(b.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
        assert_eq!(b.alpha.src_factor, wgpu::BlendFactor::One);
        assert_eq!(b.alpha.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
    }

    #[test]
    fn shader_variants_differ_only_in_fragment() {
        let plain = shader_source(SrgbMode::None);
        let srgb = shader_source(SrgbMode::Srgb);
        assert_ne!(plain, srgb);
        for src in [plain, srgb] {
            assert!(src.contains("fn vs_main"));
            assert!(src.contains("fn fs_main"));
            assert!(src.contains("* vec2<f32>(1.0, -1.0)"));
        }
        assert!(srgb.contains("GAMMA: f32 = 2.2"));
    }
}
