//! Value types shared by the CPU reference and the GPU renderer.
//!
//! Canonical UI space:
//! - Display pixels, as produced by the GUI layer
//! - Origin top-left
//! - +X right, +Y down
//!
//! The vertex stage converts to NDC using a `ViewTransform`.

mod color;
mod rect;
mod vec2;

pub use color::Rgba;
pub use rect::Rect;
pub use vec2::Vec2;
