use std::io::BufRead;
use std::path::Path;

use crate::math::Vec3;

use super::error::{LoadError, Result};
use super::open_with_extension;
use super::tokenize::{fields, first_token, lossy_lines, tail};
use super::types::Material;

/// Loads every material declared in an `.mtl` file.
pub fn load_materials(path: &Path) -> Result<Vec<Material>> {
    let reader = open_with_extension(path, "mtl")?;
    parse_materials(reader, path)
}

/// Parses material records from `reader`; `path` only labels errors and logs.
///
/// Malformed attribute lines are skipped. A source without any `newmtl`
/// is an `EmptyMaterialSet` error.
pub fn parse_materials<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Material>> {
    let mut materials = Vec::new();
    let mut current_material: Option<Material> = None;

    for (line_number, line_result) in lossy_lines(reader).enumerate() {
        let line_number = line_number + 1;
        let line = line_result?;

        let directive = first_token(&line);
        if directive.is_empty() || directive.starts_with('#') {
            continue;
        }
        let value = tail(&line);

        if directive == "newmtl" {
            if let Some(material) = current_material.take() {
                materials.push(material);
            }
            let name = if value.is_empty() { "none" } else { value };
            current_material = Some(Material::named(name));
            continue;
        }

        let Some(material) = current_material.as_mut() else {
            log::debug!(
                "{}:{}: '{}' before any newmtl, ignored",
                path.display(),
                line_number,
                directive
            );
            continue;
        };

        let applied = match directive {
            "Ka" => parse_color(value).map(|color| material.ambient = color),
            "Kd" => parse_color(value).map(|color| material.diffuse = color),
            "Ks" => parse_color(value).map(|color| material.specular = color),
            "Ns" => value.parse().ok().map(|v| material.specular_exponent = v),
            "Ni" => value.parse().ok().map(|v| material.optical_density = v),
            "d" => value.parse().ok().map(|v| material.dissolve = v),
            "illum" => value.parse().ok().map(|v| material.illum_model = v),
            "map_Ka" => texture_path(value).map(|p| material.texture_maps.ambient = Some(p)),
            "map_Kd" => texture_path(value).map(|p| material.texture_maps.diffuse = Some(p)),
            "map_Ks" => texture_path(value).map(|p| material.texture_maps.specular = Some(p)),
            "map_Ns" => {
                texture_path(value).map(|p| material.texture_maps.specular_highlight = Some(p))
            }
            "map_d" => texture_path(value).map(|p| material.texture_maps.alpha = Some(p)),
            "map_Bump" | "map_bump" | "bump" => {
                texture_path(value).map(|p| material.texture_maps.bump = Some(p))
            }
            _ => Some(()),
        };

        if applied.is_none() {
            log::warn!(
                "{}:{}: skipping malformed '{}' line in material '{}'",
                path.display(),
                line_number,
                directive,
                material.name
            );
        }
    }

    if let Some(material) = current_material {
        materials.push(material);
    }

    if materials.is_empty() {
        return Err(LoadError::EmptyMaterialSet {
            path: path.to_path_buf(),
        });
    }

    log::debug!("{}: {} materials", path.display(), materials.len());
    Ok(materials)
}

/// Exactly three floats, or `None`.
fn parse_color(value: &str) -> Option<Vec3> {
    let parts = fields(value);
    if parts.len() != 3 {
        return None;
    }
    let x = parts[0].parse().ok()?;
    let y = parts[1].parse().ok()?;
    let z = parts[2].parse().ok()?;
    Some(Vec3::new(x, y, z))
}

fn texture_path(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
