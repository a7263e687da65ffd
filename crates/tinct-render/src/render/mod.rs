//! wgpu side of the GUI pass.
//!
//! The host owns the device, the surface and the textures. This module turns
//! a `DrawData` into one render pass using the shader variant selected by
//! `SrgbMode`.
//!
//! Convention:
//! - CPU geometry is in display pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using the view uniform.

mod config;
mod ctx;
mod pipeline;
mod renderer;
mod scissor;

pub use config::RendererConfig;
pub use ctx::{RenderCtx, RenderTarget};
pub use pipeline::{blend_state, shader_source};
pub use renderer::{GuiRenderer, RenderStats};
pub use scissor::{clip_to_scissor, ScissorRect};
