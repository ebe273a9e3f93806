//! Face assembly: turns the corner references of an `f` line into vertices.

use crate::math::{Vec2, Vec3};

use super::error::{LoadError, Result};
use super::index::resolve_index;
use super::tokenize::{fields, split};
use super::types::{LoadOptions, NormalFallback, Vertex};

/// Every position, texcoord and normal declared so far, in file order.
#[derive(Debug, Default)]
pub struct AttributePools {
    pub positions: Vec<Vec3>,
    pub texcoords: Vec<Vec2>,
    pub normals: Vec<Vec3>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerShape {
    /// `p`
    Position,
    /// `p/t`
    PositionTexcoord,
    /// `p//n`
    PositionNormal,
    /// `p/t/n`
    Full,
}

/// The raw `/`-separated fields of one face corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerRef<'a> {
    pub position: &'a str,
    pub texcoord: Option<&'a str>,
    pub normal: Option<&'a str>,
}

impl<'a> CornerRef<'a> {
    pub fn parse(token: &'a str, line_number: usize) -> Result<Self> {
        let parts = split(token, '/');
        if parts.is_empty() || parts.len() > 3 {
            return Err(LoadError::malformed(
                line_number,
                "f",
                format!("invalid corner reference '{}'", token),
            ));
        }
        if parts[0].is_empty() {
            return Err(LoadError::malformed(
                line_number,
                "f",
                format!("missing position index in corner '{}'", token),
            ));
        }

        let present = |slot: usize| parts.get(slot).copied().filter(|s| !s.is_empty());
        Ok(CornerRef {
            position: parts[0],
            texcoord: present(1),
            normal: present(2),
        })
    }

    pub fn shape(&self) -> CornerShape {
        match (self.texcoord, self.normal) {
            (None, None) => CornerShape::Position,
            (Some(_), None) => CornerShape::PositionTexcoord,
            (None, Some(_)) => CornerShape::PositionNormal,
            (Some(_), Some(_)) => CornerShape::Full,
        }
    }
}

/// Resolves every corner of a face line's tail into a `Vertex`, in file order.
///
/// Faces whose corners omit normals get a flat normal from the first three
/// corners, `(c0 - c1) x (c2 - c1)`, applied as `options.normal_fallback`
/// directs.
pub fn assemble_face(
    pools: &AttributePools,
    tail: &str,
    line_number: usize,
    options: &LoadOptions,
) -> Result<Vec<Vertex>> {
    let tokens = fields(tail);
    if tokens.len() < 3 {
        return Err(LoadError::malformed(
            line_number,
            "f",
            format!("a face needs at least 3 corners, found {}", tokens.len()),
        ));
    }

    let mut vertices = Vec::with_capacity(tokens.len());
    let mut has_normal = Vec::with_capacity(tokens.len());

    for token in tokens {
        let corner = CornerRef::parse(token, line_number)?;
        let position = resolve_index(corner.position, &pools.positions, line_number, "position")?;

        let texcoord = match corner.texcoord {
            Some(raw) => {
                let texcoord = resolve_index(raw, &pools.texcoords, line_number, "texcoord")?;
                if options.flip_texcoord_v {
                    Vec2::new(texcoord.x, 1.0 - texcoord.y)
                } else {
                    texcoord
                }
            }
            None => Vec2::default(),
        };

        let normal = match corner.normal {
            Some(raw) => Some(resolve_index(raw, &pools.normals, line_number, "normal")?),
            None => None,
        };

        has_normal.push(normal.is_some());
        vertices.push(Vertex {
            position,
            normal: normal.unwrap_or_default(),
            texcoord,
        });
    }

    if has_normal.contains(&false) {
        let a = vertices[0].position - vertices[1].position;
        let b = vertices[2].position - vertices[1].position;
        let face_normal = a.cross(b);

        for (vertex, supplied) in vertices.iter_mut().zip(&has_normal) {
            if !supplied || options.normal_fallback == NormalFallback::WholeFace {
                vertex.normal = face_normal;
            }
        }
    }

    Ok(vertices)
}
