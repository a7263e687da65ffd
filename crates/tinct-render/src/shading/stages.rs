use crate::coords::{Rgba, Vec2};
use crate::vertex::Vertex;
use crate::view::ViewTransform;

use super::{Sample, SrgbMode};

/// Exponent of the display-gamma curve (the usual sRGB approximation).
pub const GAMMA: f32 = 2.2;

/// What the vertex stage hands to the rasterizer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexOutput {
    /// Clip-space position; `z = 0`, `w = 1`.
    pub position: [f32; 4],
    pub texcoord: Vec2,
    pub color: Rgba,
}

/// Projects a vertex into NDC; texcoord and color pass through unchanged.
#[inline]
pub fn vertex_stage(vertex: &Vertex, view: &ViewTransform) -> VertexOutput {
    let ndc = view.apply(vertex.position());
    VertexOutput {
        position: [ndc.x, ndc.y, 0.0, 1.0],
        texcoord: vertex.texcoord(),
        color: vertex.color(),
    }
}

/// Samples `texture` at `texcoord` and composites it with `color` using the
/// gamma-aware formula.
#[inline]
pub fn fragment_stage(texcoord: Vec2, color: Rgba, texture: &impl Sample) -> Rgba {
    composite_srgb(color, texture.sample(texcoord))
}

/// Fragment formula with the texel already fetched:
///
/// ```text
/// alpha   = color.a * tex.a
/// out.rgb = (color.rgb * alpha)^GAMMA * tex.rgb
/// out.a   = 1 - (1 - alpha)^GAMMA
/// ```
///
/// Inputs are not clamped. A negative base yields NaN.
#[inline]
pub fn composite_srgb(color: Rgba, tex: Rgba) -> Rgba {
    let alpha = color.a * tex.a;
    Rgba::new(
        (color.r * alpha).powf(GAMMA) * tex.r,
        (color.g * alpha).powf(GAMMA) * tex.g,
        (color.b * alpha).powf(GAMMA) * tex.b,
        gamma_alpha(alpha),
    )
}

/// `1 - (1 - alpha)^GAMMA`.
#[inline]
pub fn gamma_alpha(alpha: f32) -> f32 {
    1.0 - (1.0 - alpha).powf(GAMMA)
}

/// Fragment formula of the plain variant: `color * tex`.
#[inline]
pub fn composite_plain(color: Rgba, tex: Rgba) -> Rgba {
    color.modulate(tex)
}

#[inline]
pub fn composite(mode: SrgbMode, color: Rgba, tex: Rgba) -> Rgba {
    match mode {
        SrgbMode::None => composite_plain(color, tex),
        SrgbMode::Srgb => composite_srgb(color, tex),
    }
}
