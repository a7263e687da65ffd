//! End-to-end checks of the CPU reference: host data in, pixels out.

use tinct_render::shading::{composite, fragment_stage, vertex_stage, CpuTexture};
use tinct_render::{Rgba, SamplerConfig, SrgbMode, Vec2, Vertex, ViewTransform};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn display_quad_covers_ndc_square() {
    let view = ViewTransform::from_display(Vec2::zero(), Vec2::new(1280.0, 720.0)).unwrap();
    let corners = [
        (Vec2::new(0.0, 0.0), [-1.0, 1.0]),
        (Vec2::new(1280.0, 0.0), [1.0, 1.0]),
        (Vec2::new(1280.0, 720.0), [1.0, -1.0]),
        (Vec2::new(0.0, 720.0), [-1.0, -1.0]),
    ];
    for (pos, ndc) in corners {
        let out = vertex_stage(&Vertex::new(pos, Vec2::zero(), Rgba::white()), &view);
        assert!(approx(out.position[0], ndc[0]) && approx(out.position[1], ndc[1]), "{pos:?} -> {out:?}");
        assert_eq!(&out.position[2..], &[0.0, 1.0]);
    }
}

#[test]
fn glyph_coverage_from_atlas_texture() {
    // 2×1 atlas: left texel fully covered white, right texel empty.
    let atlas = CpuTexture::from_rgba8(
        2,
        1,
        &[255, 255, 255, 255, 255, 255, 255, 0],
        SamplerConfig {
            mag_filter: wgpu::FilterMode::Nearest,
            ..SamplerConfig::default()
        },
    )
    .unwrap();

    let tint = Rgba::new(0.5, 0.5, 0.5, 1.0);
    let inside = fragment_stage(Vec2::new(0.25, 0.5), tint, &atlas);
    let outside = fragment_stage(Vec2::new(0.75, 0.5), tint, &atlas);

    assert!(approx(inside.r, 0.2176) && approx(inside.a, 1.0));
    assert_eq!(outside, Rgba::transparent());
}

#[test]
fn srgb_output_is_dimmer_than_plain_for_partial_tint() {
    let tint = Rgba::new(0.5, 0.5, 0.5, 1.0);
    let plain = composite(SrgbMode::None, tint, Rgba::white());
    let srgb = composite(SrgbMode::Srgb, tint, Rgba::white());
    assert!(srgb.r < plain.r);
    assert_eq!(srgb.a, plain.a);
}
