use std::collections::HashSet;

use bytemuck::{Pod, Zeroable};

/// Interleaved vertex (32 bytes):
///
///  offset  0  position  [f32; 3]   loc 0
///  offset 12  normal    [f32; 3]   loc 1
///  offset 24  uv        [f32; 2]   loc 2
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x2  // uv
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    /// Triangle list, counter-clockwise front faces.
    pub indices: Vec<u32>,
    /// Line list; every triangle edge appears once.
    pub edges: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        let edges = unique_edges(&indices);
        Self { vertices, indices, edges }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }
}

/// Collects each undirected triangle edge once, in first-seen order.
fn unique_edges(indices: &[u32]) -> Vec<u32> {
    let mut seen = HashSet::with_capacity(indices.len());
    let mut edges = Vec::with_capacity(indices.len());

    for tri in indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            if seen.insert((a.min(b), a.max(b))) {
                edges.push(a);
                edges.push(b);
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 32);
    }

    #[test]
    fn shared_edge_is_emitted_once() {
        let edges = unique_edges(&[0, 1, 2, 2, 1, 3]);
        assert_eq!(edges.len() / 2, 5);
    }

    #[test]
    fn trailing_partial_triangle_is_ignored() {
        let edges = unique_edges(&[0, 1, 2, 3]);
        assert_eq!(edges, vec![0, 1, 1, 2, 2, 0]);
    }
}
