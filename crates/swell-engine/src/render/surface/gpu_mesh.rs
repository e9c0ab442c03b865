use wgpu::util::DeviceExt;

use crate::mesh::MeshData;

/// A mesh resident on the GPU: vertices plus triangle and edge index buffers.
pub struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) edge_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) edge_index_count: u32,
}

impl GpuMesh {
    pub fn upload(device: &wgpu::Device, mesh: &MeshData, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vbo")),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} ibo")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let edge_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} edges")),
            contents: bytemuck::cast_slice(&mesh.edges),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded mesh '{label}': {} vertices, {} triangles, {} edges",
            mesh.vertices.len(),
            mesh.triangle_count(),
            mesh.edge_count(),
        );

        Self {
            vertex_buffer,
            index_buffer,
            edge_buffer,
            index_count: mesh.indices.len() as u32,
            edge_index_count: mesh.edges.len() as u32,
        }
    }
}
