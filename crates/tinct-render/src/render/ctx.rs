use crate::coords::Vec2;

/// Renderer-facing context (device/queue + color target format).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
        }
    }
}

/// Target for drawing (encoder + color view + its size in pixels).
///
/// The pass loads existing contents unless `clear` is set. Viewport and
/// scissor rects never extend past `width` x `height`.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pub width: u32,
    pub height: u32,
    pub clear: Option<wgpu::Color>,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(
        encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
        width: u32,
        height: u32,
    ) -> Self {
        Self { encoder, color_view, width, height, clear: None }
    }

    #[inline]
    pub fn with_clear(mut self, color: wgpu::Color) -> Self {
        self.clear = Some(color);
        self
    }

    pub(super) fn load_op(&self) -> wgpu::LoadOp<wgpu::Color> {
        match self.clear {
            Some(c) => wgpu::LoadOp::Clear(c),
            None => wgpu::LoadOp::Load,
        }
    }

    /// `framebuffer_size` limited to the attachment's extent.
    pub(super) fn clamp_size(&self, framebuffer_size: Vec2) -> Vec2 {
        Vec2::new(
            framebuffer_size.x.min(self.width as f32),
            framebuffer_size.y.min(self.height as f32),
        )
    }
}
