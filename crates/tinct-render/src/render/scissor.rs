use crate::coords::{Rect, Vec2};

/// Scissor rectangle in framebuffer pixels, ready for `set_scissor_rect`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ScissorRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Converts a display-space clip rect into a framebuffer scissor rect.
///
/// The rect is offset by `display_pos` and scaled by `framebuffer_scale`,
/// then the origin is floored and the far edge ceiled so partially covered
/// pixels stay inside. The result is clamped to `fb_size`.
///
/// Returns `None` if the clip lies entirely off target or has zero area
/// (the draw call should be skipped).
pub fn clip_to_scissor(
    clip: Rect,
    display_pos: Vec2,
    framebuffer_scale: Vec2,
    fb_size: Vec2,
) -> Option<ScissorRect> {
    let r = clip.to_framebuffer(display_pos, framebuffer_scale).normalized();
    if !r.is_finite() || !r.overlaps_extent(fb_size) {
        return None;
    }

    let fb_w = fb_size.x.max(0.0) as u32;
    let fb_h = fb_size.y.max(0.0) as u32;

    let x = (r.min.x.max(0.0).floor() as u32).min(fb_w);
    let y = (r.min.y.max(0.0).floor() as u32).min(fb_h);
    let x2 = (r.max.x.max(0.0).ceil() as u32).min(fb_w);
    let y2 = (r.max.y.max(0.0).ceil() as u32).min(fb_h);

    let (width, height) = (x2.saturating_sub(x), y2.saturating_sub(y));
    if width == 0 || height == 0 {
        None
    } else {
        Some(ScissorRect { x, y, width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FB: Vec2 = Vec2::new(100.0, 80.0);

    fn scissor(clip: Rect) -> Option<ScissorRect> {
        clip_to_scissor(clip, Vec2::zero(), Vec2::splat(1.0), FB)
    }

    fn s(x: u32, y: u32, width: u32, height: u32) -> ScissorRect {
        ScissorRect { x, y, width, height }
    }

    // ── inside ────────────────────────────────────────────────────────────

    #[test]
    fn integral_clip_passes_through() {
        assert_eq!(scissor(Rect::new(10.0, 20.0, 30.0, 40.0)), Some(s(10, 20, 20, 20)));
    }

    #[test]
    fn fractional_clip_expands_outward() {
        assert_eq!(scissor(Rect::new(10.5, 20.25, 29.5, 39.1)), Some(s(10, 20, 20, 20)));
    }

    // ── clamping ──────────────────────────────────────────────────────────

    #[test]
    fn clip_past_edges_is_clamped() {
        assert_eq!(scissor(Rect::new(-50.0, -5.0, 500.0, 500.0)), Some(s(0, 0, 100, 80)));
        assert_eq!(scissor(Rect::new(90.0, 70.0, 110.0, 95.0)), Some(s(90, 70, 10, 10)));
    }

    // ── culling ───────────────────────────────────────────────────────────

    #[test]
    fn clip_off_target_is_culled() {
        assert_eq!(scissor(Rect::new(100.0, 0.0, 120.0, 10.0)), None);
        assert_eq!(scissor(Rect::new(0.0, 80.0, 10.0, 90.0)), None);
        assert_eq!(scissor(Rect::new(-20.0, 0.0, 0.0, 10.0)), None);
        assert_eq!(scissor(Rect::new(0.0, -20.0, 10.0, 0.0)), None);
    }

    #[test]
    fn zero_area_clip_is_culled() {
        assert_eq!(scissor(Rect::new(10.0, 10.0, 10.0, 50.0)), None);
    }

    #[test]
    fn non_finite_clip_is_culled() {
        assert_eq!(scissor(Rect::new(f32::NAN, 0.0, 10.0, 10.0)), None);
    }

    // ── display offset + scale ────────────────────────────────────────────

    #[test]
    fn display_pos_and_scale_are_applied() {
        let out = clip_to_scissor(
            Rect::new(110.0, 60.0, 130.0, 80.0),
            Vec2::new(100.0, 50.0),
            Vec2::splat(2.0),
            Vec2::new(200.0, 160.0),
        );
        assert_eq!(out, Some(s(20, 20, 40, 40)));
    }
}
