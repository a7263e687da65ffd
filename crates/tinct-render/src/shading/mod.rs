//! CPU reference of the GUI shader.
//!
//! These functions compute exactly what `vs_main` / `fs_main` compute, one
//! invocation at a time. They hold no state; every output is a function of
//! the view transform, the vertex data and the texture sample.

mod mode;
mod sample;
mod stages;

pub use mode::SrgbMode;
pub use sample::{CpuTexture, Sample, TextureDataError};
pub use stages::{
    composite, composite_plain, composite_srgb, fragment_stage, gamma_alpha, vertex_stage,
    VertexOutput, GAMMA,
};
