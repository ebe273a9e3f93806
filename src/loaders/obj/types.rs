use crate::math::{Vec2, Vec3};

/// How a face without per-corner normals gets its shading normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalFallback {
    /// If any corner lacks a normal, every corner of the face receives the
    /// synthesized flat normal, overwriting normals the file did supply.
    #[default]
    WholeFace,
    /// Only corners that lack a normal receive the synthesized one.
    MissingOnly,
}

/// Candidate filter applied before the ear containment test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EarFilter {
    /// Skip reflex and collinear corners.
    #[default]
    Reflex,
    /// Every corner is a candidate ear.
    Unfiltered,
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub normal_fallback: NormalFallback,
    pub ear_filter: EarFilter,
    /// Replace each texcoord `v` with `1 - v`.
    pub flip_texcoord_v: bool,
    /// Lines between progress log records; 0 disables them.
    pub progress_interval: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            normal_fallback: NormalFallback::default(),
            ear_filter: EarFilter::default(),
            flip_texcoord_v: false,
            progress_interval: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub texcoord: Vec2,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextureMaps {
    pub ambient: Option<String>,
    pub diffuse: Option<String>,
    pub specular: Option<String>,
    pub specular_highlight: Option<String>,
    pub alpha: Option<String>,
    pub bump: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    pub name: String,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub specular_exponent: f32,
    pub optical_density: f32,
    pub dissolve: f32,
    pub illum_model: i32,
    pub texture_maps: TextureMaps,
}

impl Material {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// One `(group, material)` run of faces.
///
/// `indices` address this mesh's own `vertices`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub material: Material,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadResult {
    pub meshes: Vec<Mesh>,
    /// Every mesh's vertices, concatenated in mesh order.
    pub all_vertices: Vec<Vertex>,
    /// Triangle indices into `all_vertices`.
    pub all_indices: Vec<u32>,
    pub materials: Vec<Material>,
}

impl LoadResult {
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty() && self.all_vertices.is_empty() && self.all_indices.is_empty()
    }
}
