//! Per-frame geometry handed over by the GUI layer.
//!
//! The GUI layer tessellates; this crate only uploads and draws. Vertex
//! positions and clip rects are in display pixels.

use std::fmt;
use std::sync::Arc;

use crate::coords::{Rect, Vec2};
use crate::texture::TextureId;
use crate::vertex::{Indices, Vertex};

/// Host hook invoked in the middle of a draw list with the live render pass.
pub type DrawCallback = Arc<dyn Fn(&mut wgpu::RenderPass<'_>) + Send + Sync>;

/// One command of a draw list.
#[derive(Clone)]
pub enum DrawCmd {
    /// Draw `count` indices starting at `idx_offset`, with indices biased by
    /// `vtx_offset`. Both offsets are relative to the owning list.
    Elements {
        count: usize,
        texture: TextureId,
        /// Display-space clip rect.
        clip_rect: Rect,
        vtx_offset: usize,
        idx_offset: usize,
    },
    /// Rebind pipeline, index buffer, viewport and view uniform (after a
    /// callback changed them).
    ResetRenderState,
    Callback(DrawCallback),
}

impl fmt::Debug for DrawCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCmd::Elements { count, texture, clip_rect, vtx_offset, idx_offset } => f
                .debug_struct("Elements")
                .field("count", count)
                .field("texture", texture)
                .field("clip_rect", clip_rect)
                .field("vtx_offset", vtx_offset)
                .field("idx_offset", idx_offset)
                .finish(),
            DrawCmd::ResetRenderState => f.write_str("ResetRenderState"),
            DrawCmd::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Vertices, indices and the commands that draw them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub vertices: Vec<Vertex>,
    pub indices: Indices,
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new(vertices: Vec<Vertex>, indices: impl Into<Indices>) -> Self {
        Self {
            vertices,
            indices: indices.into(),
            commands: Vec::new(),
        }
    }

    /// Appends an `Elements` command covering all indices not yet referenced
    /// by a previous `Elements` command.
    pub fn push_remaining(&mut self, texture: TextureId, clip_rect: Rect) -> &mut Self {
        let idx_offset = self
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Elements { count, idx_offset, .. } => Some(idx_offset + count),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        let count = self.indices.len().saturating_sub(idx_offset);
        self.commands.push(DrawCmd::Elements {
            count,
            texture,
            clip_rect,
            vtx_offset: 0,
            idx_offset,
        });
        self
    }

    pub fn push(&mut self, cmd: DrawCmd) -> &mut Self {
        self.commands.push(cmd);
        self
    }
}

/// Everything needed to render one GUI frame.
#[derive(Debug, Clone)]
pub struct DrawData {
    /// Top-left of the display rectangle in display pixels.
    pub display_pos: Vec2,
    pub display_size: Vec2,
    /// Physical pixels per display pixel, per axis.
    pub framebuffer_scale: Vec2,
    pub lists: Vec<DrawList>,
}

impl Default for DrawData {
    fn default() -> Self {
        Self {
            display_pos: Vec2::zero(),
            display_size: Vec2::zero(),
            framebuffer_scale: Vec2::splat(1.0),
            lists: Vec::new(),
        }
    }
}

impl DrawData {
    pub fn new(display_size: Vec2) -> Self {
        Self { display_size, ..Self::default() }
    }

    pub fn total_vtx_count(&self) -> usize {
        self.lists.iter().map(|l| l.vertices.len()).sum()
    }

    pub fn total_idx_count(&self) -> usize {
        self.lists.iter().map(|l| l.indices.len()).sum()
    }

    /// Framebuffer size in physical pixels.
    pub fn framebuffer_size(&self) -> Vec2 {
        self.display_size * self.framebuffer_scale
    }

    /// Common index format of all lists, or `None` when lists mix widths.
    ///
    /// An empty frame reports `Uint16`.
    pub fn index_format(&self) -> Option<wgpu::IndexFormat> {
        let mut formats = self
            .lists
            .iter()
            .filter(|l| !l.indices.is_empty())
            .map(|l| l.indices.format());
        let first = formats.next().unwrap_or(wgpu::IndexFormat::Uint16);
        formats.all(|f| f == first).then_some(first)
    }
}
