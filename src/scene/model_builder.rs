use std::path::Path;

use crate::loaders::obj::{self, LoadOptions, LoadResult};

use super::model::{MeshComponent, SimpleVertex};

/// Loads an OBJ file into a single renderer-ready buffer pair named after the file.
pub fn build_mesh_component(model_path: &str, options: &LoadOptions) -> obj::Result<MeshComponent> {
    let result = obj::load_file_with_options(Path::new(model_path), options)?;
    Ok(mesh_component_from(model_path, &result))
}

/// Flattens the global vertex/index view of `result`; per-mesh splits and
/// normals are dropped.
pub fn mesh_component_from(name: &str, result: &LoadResult) -> MeshComponent {
    let vertices: Vec<SimpleVertex> = result.all_vertices.iter().map(SimpleVertex::from).collect();
    let indices = result.all_indices.clone();

    MeshComponent {
        name: name.to_string(),
        num_vertices: vertices.len(),
        num_indices: indices.len(),
        vertices,
        indices,
    }
}
