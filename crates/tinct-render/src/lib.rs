//! tinct: gamma-aware renderer for immediate-mode GUI triangle lists.
//!
//! Two forms of the same pipeline live here:
//! - `render`: the wgpu pass (WGSL shader, blend state, buffers, scissoring)
//! - `shading`: a CPU reference of the vertex and fragment stages
//!
//! Geometry generation, font atlases and the render loop belong to the host.

pub mod coords;
pub mod draw;
pub mod headless;
pub mod logging;
pub mod render;
pub mod shading;
pub mod texture;
pub mod vertex;
pub mod view;

pub use coords::{Rect, Rgba, Vec2};
pub use draw::{DrawCallback, DrawCmd, DrawData, DrawList};
pub use render::{GuiRenderer, RenderCtx, RenderStats, RenderTarget, RendererConfig};
pub use shading::SrgbMode;
pub use texture::{GuiTexture, SamplerConfig, TextureId, TextureRegistry};
pub use vertex::{Indices, Vertex};
pub use view::{ViewTransform, ViewUniform};
