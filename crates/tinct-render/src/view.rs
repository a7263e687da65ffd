//! UI space → NDC mapping.

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// Per-frame mapping from UI pixels to normalized device coordinates.
///
/// Owned by the host and updated between draw calls (typically on viewport
/// resize). The vertex stage only reads it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    pub scale: Vec2,
    pub translate: Vec2,
}

impl Default for ViewTransform {
    /// Identity mapping (before the y-flip).
    fn default() -> Self {
        Self {
            scale: Vec2::splat(1.0),
            translate: Vec2::zero(),
        }
    }
}

impl ViewTransform {
    #[inline]
    pub const fn new(scale: Vec2, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// Builds the transform that maps the display rectangle
    /// `[display_pos, display_pos + display_size]` onto `[-1, 1]²`.
    ///
    /// Returns `None` for a non-positive or non-finite display size.
    pub fn from_display(display_pos: Vec2, display_size: Vec2) -> Option<Self> {
        let valid = display_size.is_finite()
            && display_pos.is_finite()
            && display_size.x > 0.0
            && display_size.y > 0.0;
        if !valid {
            return None;
        }

        let scale = Vec2::new(2.0 / display_size.x, 2.0 / display_size.y);
        let translate = Vec2::new(
            -1.0 - display_pos.x * scale.x,
            -1.0 - display_pos.y * scale.y,
        );
        Some(Self { scale, translate })
    }

    /// `(position * scale + translate) * (1, -1)`.
    ///
    /// The y-flip is fixed: UI space is +Y down, NDC is +Y up.
    #[inline]
    pub fn apply(&self, position: Vec2) -> Vec2 {
        let v = position * self.scale + self.translate;
        Vec2::new(v.x, -v.y)
    }

    #[inline]
    pub fn uniform(&self) -> ViewUniform {
        ViewUniform {
            scale: self.scale.to_array(),
            translate: self.translate.to_array(),
        }
    }
}

/// GPU layout of `ViewTransform`: two consecutive `vec2<f32>` (16 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ViewUniform {
    pub scale: [f32; 2],
    pub translate: [f32; 2],
}

impl ViewUniform {
    pub const SIZE: u64 = std::mem::size_of::<ViewUniform>() as u64;

    /// Minimum binding size for the view uniform buffer.
    pub fn min_binding_size() -> std::num::NonZeroU64 {
        std::num::NonZeroU64::new(Self::SIZE).unwrap_or(std::num::NonZeroU64::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    // ── from_display ──────────────────────────────────────────────────────

    #[test]
    fn display_corners_map_to_ndc_corners() {
        let view = ViewTransform::from_display(Vec2::zero(), Vec2::new(800.0, 600.0)).unwrap();
        assert!(approx(view.apply(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0)));
        assert!(approx(view.apply(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0)));
        assert!(approx(view.apply(Vec2::new(400.0, 300.0)), Vec2::zero()));
    }

    #[test]
    fn display_offset_is_subtracted() {
        let pos = Vec2::new(100.0, 50.0);
        let view = ViewTransform::from_display(pos, Vec2::new(200.0, 100.0)).unwrap();
        assert!(approx(view.apply(pos), Vec2::new(-1.0, 1.0)));
        assert!(approx(view.apply(Vec2::new(300.0, 150.0)), Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn degenerate_display_is_rejected() {
        assert!(ViewTransform::from_display(Vec2::zero(), Vec2::new(0.0, 10.0)).is_none());
        assert!(ViewTransform::from_display(Vec2::zero(), Vec2::new(10.0, -1.0)).is_none());
        assert!(ViewTransform::from_display(Vec2::zero(), Vec2::new(f32::NAN, 1.0)).is_none());
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn apply_matches_affine_formula() {
        let view = ViewTransform::new(Vec2::new(0.5, -2.0), Vec2::new(3.0, 0.25));
        let p = Vec2::new(4.0, 1.5);
        let expected = Vec2::new(4.0 * 0.5 + 3.0, -(1.5 * -2.0 + 0.25));
        assert_eq!(view.apply(p), expected);
    }

    // ── uniform ───────────────────────────────────────────────────────────

    #[test]
    fn uniform_is_sixteen_bytes_scale_first() {
        assert_eq!(ViewUniform::SIZE, 16);
        let view = ViewTransform::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        let u = view.uniform();
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
