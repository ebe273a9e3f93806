pub mod cli;
pub mod error;

use std::path::Path;

use crate::loaders::obj::{self, LoadResult};
use crate::scene;

use cli::AppConfig;
use error::AppError;

pub fn run_from_env() -> Result<(), AppError> {
    let config = cli::parse_from_env().map_err(AppError::Cli)?;
    run(config)
}

pub fn run(config: AppConfig) -> Result<(), AppError> {
    let result = obj::load_file_with_options(Path::new(&config.model_path), &config.options)?;
    print!("{}", summarize(&config.model_path, &result));
    Ok(())
}

/// Human-readable report of a load: one line per mesh, then totals.
pub fn summarize(model_path: &str, result: &LoadResult) -> String {
    let mut report = format!("{}\n", model_path);

    for mesh in &result.meshes {
        let material = if mesh.material.name.is_empty() {
            "-"
        } else {
            mesh.material.name.as_str()
        };
        report.push_str(&format!(
            "- {}\t| vertices > {}\t| triangles > {}\t| material: {}",
            mesh.name,
            mesh.vertices.len(),
            mesh.triangle_count(),
            material
        ));
        if let Some(diffuse) = &mesh.material.texture_maps.diffuse {
            report.push_str(&format!("\t| diffuse: {}", diffuse));
        }
        report.push('\n');
    }

    let (x, y, z) = scene::bounds::center_all_axes(&result.all_vertices);
    report.push_str(&format!(
        "total: {} meshes, {} vertices, {} triangles, {} materials\ncenter: ({:.3}, {:.3}, {:.3})\n",
        result.meshes.len(),
        result.all_vertices.len(),
        result.all_indices.len() / 3,
        result.materials.len(),
        x,
        y,
        z
    ));
    report
}
