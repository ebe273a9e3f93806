use std::io::BufRead;
use std::path::Path;

use crate::math::{Vec2, Vec3};

use super::error::{LoadError, Result};
use super::face::{assemble_face, AttributePools};
use super::index::parse_components;
use super::open_with_extension;
use super::parse_mtl::load_materials;
use super::tokenize::{fields, first_token, lossy_lines, tail};
use super::triangulate::triangulate;
use super::types::{LoadOptions, LoadResult, Mesh, Vertex};

const UNNAMED: &str = "unnamed";

/// Loads an `.obj` file with default options.
pub fn load_file(path: &Path) -> Result<LoadResult> {
    load_file_with_options(path, &LoadOptions::default())
}

pub fn load_file_with_options(path: &Path, options: &LoadOptions) -> Result<LoadResult> {
    let reader = open_with_extension(path, "obj")?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    let result = parse(reader, path, base_dir, options)?;
    log::info!(
        "loaded {}: {} meshes, {} vertices, {} triangles, {} materials",
        path.display(),
        result.meshes.len(),
        result.all_vertices.len(),
        result.all_indices.len() / 3,
        result.materials.len()
    );
    Ok(result)
}

/// Parses OBJ text held in memory. `mtllib` paths resolve against `base_dir`.
pub fn load_str(source: &str, base_dir: &Path, options: &LoadOptions) -> Result<LoadResult> {
    parse(source.as_bytes(), Path::new("<memory>"), base_dir, options)
}

fn parse<R: BufRead>(
    reader: R,
    path: &Path,
    base_dir: &Path,
    options: &LoadOptions,
) -> Result<LoadResult> {
    let mut context = ParseContext::new(base_dir, options);

    for (line_number, line_result) in lossy_lines(reader).enumerate() {
        let line_number = line_number + 1;
        let line = line_result?;
        context.handle_line(line_number, &line)?;

        if options.progress_interval > 0 && line_number % options.progress_interval == 0 {
            context.log_progress(line_number);
        }
    }

    let result = context.finish();
    if result.is_empty() {
        return Err(LoadError::EmptyModel {
            path: path.to_path_buf(),
        });
    }
    Ok(result)
}

/// All mutable state of one load, threaded through every directive handler.
struct ParseContext<'a> {
    options: &'a LoadOptions,
    base_dir: &'a Path,
    pools: AttributePools,
    /// Name of the open group; `None` until the first `o`/`g`.
    group: Option<String>,
    mesh_name: String,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    material: Option<String>,
    /// `(material name, mesh index)` pairs resolved after the pass.
    bindings: Vec<(String, usize)>,
    result: LoadResult,
}

impl<'a> ParseContext<'a> {
    fn new(base_dir: &'a Path, options: &'a LoadOptions) -> Self {
        Self {
            options,
            base_dir,
            pools: AttributePools::default(),
            group: None,
            mesh_name: UNNAMED.to_string(),
            vertices: Vec::new(),
            indices: Vec::new(),
            material: None,
            bindings: Vec::new(),
            result: LoadResult::default(),
        }
    }

    fn handle_line(&mut self, line_number: usize, line: &str) -> Result<()> {
        let directive = first_token(line);
        if directive.is_empty() || directive.starts_with('#') {
            return Ok(());
        }
        let value = tail(line);

        if directive == "o" || directive == "g" || line.starts_with('g') {
            let name = if (directive == "o" || directive == "g") && !value.is_empty() {
                value
            } else {
                UNNAMED
            };
            self.open_group(name);
            return Ok(());
        }

        match directive {
            "v" => {
                let v = parse_components(&fields(value), 3, 1, line_number, directive)?;
                self.pools.positions.push(Vec3::new(v[0], v[1], v[2]));
            }
            "vt" => {
                let v = parse_components(&fields(value), 2, 1, line_number, directive)?;
                self.pools.texcoords.push(Vec2::new(v[0], v[1]));
            }
            "vn" => {
                let v = parse_components(&fields(value), 3, 0, line_number, directive)?;
                self.pools.normals.push(Vec3::new(v[0], v[1], v[2]));
            }
            "f" => self.push_face(line_number, value)?,
            "usemtl" => self.use_material(value),
            "mtllib" => self.load_material_library(line_number, value),
            _ => {}
        }
        Ok(())
    }

    /// Closes the current mesh if a group is open and holds faces, then names
    /// the next one. Faces read before the first group join that group.
    fn open_group(&mut self, name: &str) {
        if self.group.is_some() {
            self.close_mesh();
        }
        self.group = Some(name.to_string());
        self.mesh_name = name.to_string();
    }

    fn push_face(&mut self, line_number: usize, value: &str) -> Result<()> {
        let corners = assemble_face(&self.pools, value, line_number, self.options)?;

        let local_base = index_base(self.vertices.len(), line_number)?;
        let global_base = index_base(self.result.all_vertices.len(), line_number)?;
        index_base(self.result.all_vertices.len() + corners.len(), line_number)?;

        self.vertices.extend_from_slice(&corners);
        self.result.all_vertices.extend_from_slice(&corners);

        let triangles = triangulate(&corners, self.options.ear_filter);
        self.indices
            .extend(triangles.iter().map(|&slot| local_base + slot));
        self.result
            .all_indices
            .extend(triangles.iter().map(|&slot| global_base + slot));
        Ok(())
    }

    /// A material change inside a group with faces splits the group, so each
    /// `(group, material)` pair becomes its own mesh.
    fn use_material(&mut self, name: &str) {
        if self.close_mesh() {
            self.mesh_name = self.unique_split_name();
        }
        self.material = Some(name.to_string());
    }

    fn load_material_library(&mut self, line_number: usize, value: &str) {
        if value.is_empty() {
            log::warn!("line {}: mtllib without a file name, ignored", line_number);
            return;
        }

        let mtl_path = self.base_dir.join(value);
        log::info!("loading materials from {}", mtl_path.display());
        match load_materials(&mtl_path) {
            Ok(materials) => self.result.materials.extend(materials),
            Err(error) => log::warn!("line {}: material library skipped: {}", line_number, error),
        }
    }

    /// Pushes the accumulated faces as a mesh; false when there was nothing to push.
    fn close_mesh(&mut self) -> bool {
        if self.vertices.is_empty() {
            return false;
        }

        let mesh = Mesh {
            name: self.mesh_name.clone(),
            vertices: std::mem::take(&mut self.vertices),
            indices: std::mem::take(&mut self.indices),
            ..Default::default()
        };
        log::debug!(
            "closed mesh '{}' with {} triangles",
            mesh.name,
            mesh.triangle_count()
        );

        if let Some(material) = &self.material {
            self.bindings
                .push((material.clone(), self.result.meshes.len()));
        }
        self.result.meshes.push(mesh);
        true
    }

    /// `<group>_<n>` with the smallest `n >= 2` no emitted mesh uses.
    fn unique_split_name(&self) -> String {
        let base = self.group.as_deref().unwrap_or(UNNAMED);
        (2..)
            .map(|n| format!("{}_{}", base, n))
            .find(|candidate| self.result.meshes.iter().all(|mesh| &mesh.name != candidate))
            .unwrap_or_else(|| base.to_string())
    }

    fn log_progress(&self, line_number: usize) {
        log::debug!(
            "line {} | {} | vertices > {} | texcoords > {} | normals > {} | triangles > {} | material: {}",
            line_number,
            self.mesh_name,
            self.pools.positions.len(),
            self.pools.texcoords.len(),
            self.pools.normals.len(),
            self.result.all_indices.len() / 3,
            self.material.as_deref().unwrap_or("-")
        );
    }

    fn finish(mut self) -> LoadResult {
        self.close_mesh();

        for (name, mesh_index) in &self.bindings {
            match self.result.materials.iter().find(|m| &m.name == name) {
                Some(material) => self.result.meshes[*mesh_index].material = material.clone(),
                None => log::warn!(
                    "mesh '{}' uses unknown material '{}'",
                    self.result.meshes[*mesh_index].name,
                    name
                ),
            }
        }

        self.result
    }
}

/// Converts a vertex count to an index offset, rejecting counts past `u32`.
fn index_base(count: usize, line_number: usize) -> Result<u32> {
    u32::try_from(count).map_err(|_| {
        LoadError::malformed(
            line_number,
            "f",
            format!("{} vertices exceed the 32-bit index range", count),
        )
    })
}
