//! GUI vertex and index streams.

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rgba, Vec2};

/// One GUI vertex.
///
/// Layout (32 bytes):
///
///  offset  0  position  [f32; 2]   loc 0
///  offset  8  texcoord  [f32; 2]   loc 1
///  offset 16  color     [f32; 4]   loc 2
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub texcoord: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x2, // texcoord
        2 => Float32x4  // color
    ];

    #[inline]
    pub fn new(position: Vec2, texcoord: Vec2, color: Rgba) -> Self {
        Self {
            position: position.to_array(),
            texcoord: texcoord.to_array(),
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position.into()
    }

    #[inline]
    pub fn texcoord(&self) -> Vec2 {
        self.texcoord.into()
    }

    #[inline]
    pub fn color(&self) -> Rgba {
        self.color.into()
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Index stream of one draw list. GUI layers emit either 16- or 32-bit indices.
#[derive(Debug, Clone, PartialEq)]
pub enum Indices {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl Default for Indices {
    fn default() -> Self {
        Indices::U16(Vec::new())
    }
}

impl Indices {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Indices::U16(v) => v.len(),
            Indices::U32(v) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn format(&self) -> wgpu::IndexFormat {
        match self {
            Indices::U16(_) => wgpu::IndexFormat::Uint16,
            Indices::U32(_) => wgpu::IndexFormat::Uint32,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Indices::U16(v) => bytemuck::cast_slice(v),
            Indices::U32(v) => bytemuck::cast_slice(v),
        }
    }

    /// Returns index `i` widened to `u32`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<u32> {
        match self {
            Indices::U16(v) => v.get(i).map(|&x| x as u32),
            Indices::U32(v) => v.get(i).copied(),
        }
    }
}

impl From<Vec<u16>> for Indices {
    fn from(v: Vec<u16>) -> Self {
        Indices::U16(v)
    }
}

impl From<Vec<u32>> for Indices {
    fn from(v: Vec<u32>) -> Self {
        Indices::U32(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stride_is_thirty_two_bytes() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(Vertex::layout().array_stride, 32);
    }

    #[test]
    fn attribute_offsets_follow_field_order() {
        let offsets: Vec<_> = Vertex::ATTRS.iter().map(|a| (a.shader_location, a.offset)).collect();
        assert_eq!(offsets, vec![(0, 0), (1, 8), (2, 16)]);
    }

    #[test]
    fn index_bytes_match_width() {
        let a = Indices::from(vec![0u16, 1, 2]);
        let b = Indices::from(vec![0u32, 1, 2]);
        assert_eq!(a.as_bytes().len(), 6);
        assert_eq!(b.as_bytes().len(), 12);
        assert_eq!(a.format(), wgpu::IndexFormat::Uint16);
        assert_eq!(b.get(2), Some(2));
        assert_eq!(a.get(3), None);
    }
}
