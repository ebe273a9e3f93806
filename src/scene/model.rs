use crate::loaders::obj::Vertex;

/// Position and texture coordinate, laid out for a GPU vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SimpleVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl From<&Vertex> for SimpleVertex {
    fn from(vertex: &Vertex) -> Self {
        Self {
            position: [vertex.position.x, vertex.position.y, vertex.position.z],
            tex_coords: [vertex.texcoord.x, vertex.texcoord.y],
        }
    }
}

/// A whole model flattened into one vertex/index buffer pair.
#[derive(Clone, Debug, Default)]
pub struct MeshComponent {
    pub name: String,
    pub vertices: Vec<SimpleVertex>,
    pub indices: Vec<u32>,
    pub num_vertices: usize,
    pub num_indices: usize,
}

impl MeshComponent {
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
