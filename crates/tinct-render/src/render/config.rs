use crate::shading::SrgbMode;

/// Construction parameters for `GuiRenderer`.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Fragment formula and matching blend state.
    pub srgb_mode: SrgbMode,

    /// Prefix for wgpu object labels (shows up in GPU debuggers).
    pub label: &'static str,

    /// Initial vertex/index buffer sizes in bytes. Buffers grow to the next
    /// power of two when a frame needs more.
    pub initial_buffer_size: u64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            srgb_mode: SrgbMode::Srgb,
            label: "tinct gui",
            initial_buffer_size: 64 * 1024,
        }
    }
}
