use std::fmt;

use crate::coords::{Rgba, Vec2};
use crate::texture::SamplerConfig;

/// Texture lookup as seen by the fragment stage.
pub trait Sample {
    /// Returns the filtered texel at normalized coordinates `uv`.
    fn sample(&self, uv: Vec2) -> Rgba;
}

/// A constant color samples as itself everywhere (a 1×1 texture).
impl Sample for Rgba {
    #[inline]
    fn sample(&self, _uv: Vec2) -> Rgba {
        *self
    }
}

impl<S: Sample + ?Sized> Sample for &S {
    #[inline]
    fn sample(&self, uv: Vec2) -> Rgba {
        (**self).sample(uv)
    }
}

/// Returned when texel data does not cover `width * height` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDataError {
    pub width: u32,
    pub height: u32,
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for TextureDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "texture data for {}x{} needs {} elements, got {}",
            self.width, self.height, self.expected, self.actual
        )
    }
}

impl std::error::Error for TextureDataError {}

/// RGBA image sampled on the CPU with the same filter / address rules as the
/// GPU sampler described by `SamplerConfig`.
///
/// Texel centers sit at `(i + 0.5) / width`. Mipmaps are not modeled.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuTexture {
    width: u32,
    height: u32,
    texels: Vec<Rgba>,
    sampler: SamplerConfig,
}

impl CpuTexture {
    pub fn new(
        width: u32,
        height: u32,
        texels: Vec<Rgba>,
        sampler: SamplerConfig,
    ) -> Result<Self, TextureDataError> {
        let expected = width as usize * height as usize;
        if expected == 0 || texels.len() != expected {
            return Err(TextureDataError { width, height, expected, actual: texels.len() });
        }
        Ok(Self { width, height, texels, sampler })
    }

    /// Builds a texture from tightly packed `Rgba8Unorm` bytes.
    pub fn from_rgba8(
        width: u32,
        height: u32,
        bytes: &[u8],
        sampler: SamplerConfig,
    ) -> Result<Self, TextureDataError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(TextureDataError { width, height, expected, actual: bytes.len() });
        }
        let texels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::from_unorm8([px[0], px[1], px[2], px[3]]))
            .collect();
        Self::new(width, height, texels, sampler)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn sampler(&self) -> &SamplerConfig {
        &self.sampler
    }

    /// Unfiltered fetch with addressing applied. Out-of-range texels under
    /// `ClampToBorder` read as transparent black.
    pub fn texel(&self, x: i64, y: i64) -> Rgba {
        let sx = address(x, self.width, self.sampler.address_mode_u);
        let sy = address(y, self.height, self.sampler.address_mode_v);
        match (sx, sy) {
            (Some(sx), Some(sy)) => self.texels[sy * self.width as usize + sx],
            _ => Rgba::transparent(),
        }
    }

    fn sample_nearest(&self, uv: Vec2) -> Rgba {
        let x = texel_coord(uv.x * self.width as f32).floor() as i64;
        let y = texel_coord(uv.y * self.height as f32).floor() as i64;
        self.texel(x, y)
    }

    fn sample_linear(&self, uv: Vec2) -> Rgba {
        let fx = texel_coord(uv.x * self.width as f32 - 0.5);
        let fy = texel_coord(uv.y * self.height as f32 - 0.5);
        let x0 = fx.floor();
        let y0 = fy.floor();
        let tx = fx - x0;
        let ty = fy - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let top = self.texel(x0, y0).lerp(self.texel(x0 + 1, y0), tx);
        let bottom = self.texel(x0, y0 + 1).lerp(self.texel(x0 + 1, y0 + 1), tx);
        top.lerp(bottom, ty)
    }
}

impl Sample for CpuTexture {
    fn sample(&self, uv: Vec2) -> Rgba {
        if !uv.is_finite() {
            return Rgba::transparent();
        }
        // Magnification filter only; there is no LOD on the CPU path.
        match self.sampler.mag_filter {
            wgpu::FilterMode::Nearest => self.sample_nearest(uv),
            wgpu::FilterMode::Linear => self.sample_linear(uv),
        }
    }
}

/// Bound on texel-space coordinates so the integer neighbours of any finite
/// texcoord (and `2 * size` in `address`) stay far from `i64` overflow.
const TEXEL_COORD_LIMIT: f32 = 2_147_483_648.0;

#[inline]
fn texel_coord(t: f32) -> f32 {
    t.clamp(-TEXEL_COORD_LIMIT, TEXEL_COORD_LIMIT)
}

/// Maps an integer texel coordinate into `[0, size)`.
fn address(i: i64, size: u32, mode: wgpu::AddressMode) -> Option<usize> {
    let n = size as i64;
    let mapped = match mode {
        wgpu::AddressMode::ClampToEdge => i.clamp(0, n - 1),
        wgpu::AddressMode::Repeat => i.rem_euclid(n),
        wgpu::AddressMode::MirrorRepeat => {
            let t = i.rem_euclid(2 * n);
            if t >= n { 2 * n - 1 - t } else { t }
        }
        wgpu::AddressMode::ClampToBorder => {
            if i < 0 || i >= n {
                return None;
            }
            i
        }
    };
    Some(mapped as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampler(filter: wgpu::FilterMode, mode: wgpu::AddressMode) -> SamplerConfig {
        SamplerConfig {
            address_mode_u: mode,
            address_mode_v: mode,
            mag_filter: filter,
            min_filter: filter,
            ..SamplerConfig::default()
        }
    }

    /// 2×1 texture: black on the left, white on the right.
    fn black_white(filter: wgpu::FilterMode, mode: wgpu::AddressMode) -> CpuTexture {
        CpuTexture::new(2, 1, vec![Rgba::black(), Rgba::white()], sampler(filter, mode)).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn rejects_mismatched_texel_count() {
        let err = CpuTexture::new(2, 2, vec![Rgba::white(); 3], SamplerConfig::default()).unwrap_err();
        assert_eq!(err.expected, 4);
        assert_eq!(err.actual, 3);
        assert!(err.to_string().contains("2x2"));
    }

    #[test]
    fn rejects_empty_texture() {
        assert!(CpuTexture::new(0, 4, Vec::new(), SamplerConfig::default()).is_err());
    }

    #[test]
    fn from_rgba8_normalizes_bytes() {
        let tex = CpuTexture::from_rgba8(1, 1, &[255, 0, 51, 255], SamplerConfig::default()).unwrap();
        assert_eq!(tex.texel(0, 0), Rgba::new(1.0, 0.0, 0.2, 1.0));
        assert!(CpuTexture::from_rgba8(1, 1, &[0, 0, 0], SamplerConfig::default()).is_err());
    }

    // ── filtering ─────────────────────────────────────────────────────────

    #[test]
    fn nearest_picks_containing_texel() {
        let tex = black_white(wgpu::FilterMode::Nearest, wgpu::AddressMode::ClampToEdge);
        assert_eq!(tex.sample(Vec2::new(0.2, 0.5)), Rgba::black());
        assert_eq!(tex.sample(Vec2::new(0.7, 0.5)), Rgba::white());
    }

    #[test]
    fn linear_blends_between_texel_centers() {
        let tex = black_white(wgpu::FilterMode::Linear, wgpu::AddressMode::ClampToEdge);
        let mid = tex.sample(Vec2::new(0.5, 0.5));
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert_eq!(mid.a, 1.0);
        assert_eq!(tex.sample(Vec2::new(0.25, 0.5)), Rgba::black());
        assert_eq!(tex.sample(Vec2::new(0.75, 0.5)), Rgba::white());
    }

    // ── addressing ────────────────────────────────────────────────────────

    #[test]
    fn clamp_to_edge_extends_border_texels() {
        let tex = black_white(wgpu::FilterMode::Nearest, wgpu::AddressMode::ClampToEdge);
        assert_eq!(tex.sample(Vec2::new(-3.0, 0.5)), Rgba::black());
        assert_eq!(tex.sample(Vec2::new(4.0, 0.5)), Rgba::white());
    }

    #[test]
    fn repeat_wraps() {
        let tex = black_white(wgpu::FilterMode::Nearest, wgpu::AddressMode::Repeat);
        assert_eq!(tex.sample(Vec2::new(1.25, 0.5)), Rgba::black());
        assert_eq!(tex.sample(Vec2::new(-0.25, 0.5)), Rgba::white());
    }

    #[test]
    fn mirror_repeat_reflects() {
        let tex = black_white(wgpu::FilterMode::Nearest, wgpu::AddressMode::MirrorRepeat);
        assert_eq!(tex.texel(2, 0), Rgba::white());
        assert_eq!(tex.texel(3, 0), Rgba::black());
        assert_eq!(tex.texel(-1, 0), Rgba::black());
    }

    #[test]
    fn clamp_to_border_reads_transparent() {
        let tex = black_white(wgpu::FilterMode::Nearest, wgpu::AddressMode::ClampToBorder);
        assert_eq!(tex.sample(Vec2::new(1.5, 0.5)), Rgba::transparent());
        assert_eq!(tex.sample(Vec2::new(0.75, 0.5)), Rgba::white());
    }

    #[test]
    fn huge_finite_uv_is_defined_for_every_mode() {
        let modes = [
            wgpu::AddressMode::ClampToEdge,
            wgpu::AddressMode::Repeat,
            wgpu::AddressMode::MirrorRepeat,
            wgpu::AddressMode::ClampToBorder,
        ];
        for mode in modes {
            for filter in [wgpu::FilterMode::Nearest, wgpu::FilterMode::Linear] {
                let tex = black_white(filter, mode);
                for uv in [Vec2::new(1e30, 0.5), Vec2::new(-1e30, 0.5), Vec2::new(0.5, f32::MAX)] {
                    assert!(tex.sample(uv).is_finite(), "{mode:?} {filter:?} {uv:?}");
                }
            }
        }

        let clamped = black_white(wgpu::FilterMode::Linear, wgpu::AddressMode::ClampToEdge);
        assert_eq!(clamped.sample(Vec2::new(1e30, 0.5)), Rgba::white());
        assert_eq!(clamped.sample(Vec2::new(-1e30, 0.5)), Rgba::black());
        let border = black_white(wgpu::FilterMode::Linear, wgpu::AddressMode::ClampToBorder);
        assert_eq!(border.sample(Vec2::new(1e30, 0.5)), Rgba::transparent());
    }

    #[test]
    fn non_finite_uv_samples_transparent() {
        let tex = black_white(wgpu::FilterMode::Linear, wgpu::AddressMode::Repeat);
        assert_eq!(tex.sample(Vec2::new(f32::NAN, 0.0)), Rgba::transparent());
    }
}
