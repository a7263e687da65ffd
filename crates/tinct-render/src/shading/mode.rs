/// Selects the fragment formula and the blend state that goes with it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SrgbMode {
    /// `out = color * tex`, straight alpha blending.
    None,
    /// Gamma-encoded tint and coverage for a display-gamma framebuffer.
    ///
    /// The output color is already multiplied by coverage, so it is blended
    /// with `src * 1 + dst * (1 - src_alpha)`.
    #[default]
    Srgb,
}

impl SrgbMode {
    pub const fn label(self) -> &'static str {
        match self {
            SrgbMode::None => "tinct gui",
            SrgbMode::Srgb => "tinct gui srgb",
        }
    }
}
