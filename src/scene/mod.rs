pub mod bounds;
mod model;
mod model_builder;

pub use model::{MeshComponent, SimpleVertex};
pub use model_builder::{build_mesh_component, mesh_component_from};
