use crate::math::Vec3;

use super::types::{EarFilter, Vertex};

const DEGENERATE_ANGLE_DEGREES: f32 = 1e-4;
const PLANE_TOLERANCE: f32 = 1e-5;

/// Triangulates one polygon face by ear clipping.
///
/// Returned indices address `corners` by slot, three per triangle. Each
/// triangle lists its slots in ascending order, which is a rotation of
/// `(prev, cur, next)` and so keeps the face's winding. A polygon with no
/// clippable ear (self-intersecting or degenerate) yields only the
/// triangles found before the search stalled.
pub fn triangulate(corners: &[Vertex], filter: EarFilter) -> Vec<u32> {
    let positions: Vec<Vec3> = corners.iter().map(|corner| corner.position).collect();
    let n = positions.len();

    if n < 3 {
        return Vec::new();
    }
    if n == 3 {
        return vec![0, 1, 2];
    }

    let normal = newell_normal(&positions);
    let mut indices = Vec::with_capacity((n - 2) * 3);
    let mut remaining: Vec<usize> = (0..n).collect();

    loop {
        match remaining.len() {
            3 => {
                emit(&mut indices, remaining[0], remaining[1], remaining[2]);
                break;
            }
            4 => {
                split_quad(&mut indices, &remaining, &positions, normal, filter);
                break;
            }
            _ => {}
        }

        let len = remaining.len();
        let ear = (0..len).find(|&i| {
            let prev = remaining[(i + len - 1) % len];
            let cur = remaining[i];
            let next = remaining[(i + 1) % len];

            if filter == EarFilter::Reflex && !is_convex(&positions, prev, cur, next, normal) {
                return false;
            }

            !(0..n).any(|other| {
                other != prev
                    && other != cur
                    && other != next
                    && in_triangle(positions[other], positions[prev], positions[cur], positions[next])
            })
        });

        match ear {
            Some(i) => {
                let prev = remaining[(i + len - 1) % len];
                let next = remaining[(i + 1) % len];
                emit(&mut indices, prev, remaining[i], next);
                remaining.remove(i);
            }
            None => {
                log::warn!(
                    "no ear found with {} of {} corners left; polygon is degenerate or self-intersecting",
                    len,
                    n
                );
                break;
            }
        }
    }

    indices
}

/// Splits a four-corner working set along one diagonal.
fn split_quad(
    indices: &mut Vec<u32>,
    quad: &[usize],
    positions: &[Vec3],
    normal: Vec3,
    filter: EarFilter,
) {
    let corner_is_convex = |i: usize| {
        is_convex(positions, quad[(i + 3) % 4], quad[i], quad[(i + 1) % 4], normal)
    };

    // The default cut is the diagonal through quad[1] and quad[3]; it leaves
    // the polygon whenever quad[0] or quad[2] is reflex.
    let start = if filter == EarFilter::Reflex && !(corner_is_convex(0) && corner_is_convex(2)) {
        1
    } else {
        0
    };

    let cur = quad[start];
    let prev = quad[(start + 3) % 4];
    let next = quad[(start + 1) % 4];
    let fourth = quad[(start + 2) % 4];

    emit(indices, prev, cur, next);
    emit(indices, prev, next, fourth);
}

fn emit(indices: &mut Vec<u32>, a: usize, b: usize, c: usize) {
    let mut triangle = [a, b, c];
    triangle.sort_unstable();
    indices.extend(triangle.iter().map(|&slot| slot as u32));
}

/// True when `cur` turns the same way as the polygon and is not collinear
/// with its neighbours.
fn is_convex(positions: &[Vec3], prev: usize, cur: usize, next: usize, normal: Vec3) -> bool {
    let (p_prev, p_cur, p_next) = (positions[prev], positions[cur], positions[next]);

    let angle = (p_prev - p_cur).angle_between(p_next - p_cur).to_degrees();
    if angle.is_nan()
        || angle <= DEGENERATE_ANGLE_DEGREES
        || angle >= 180.0 - DEGENERATE_ANGLE_DEGREES
    {
        return false;
    }

    let turn = (p_cur - p_prev).cross(p_next - p_cur);
    turn.dot(normal) > 0.0
}

/// Polygon normal whose direction follows the corner winding.
fn newell_normal(points: &[Vec3]) -> Vec3 {
    let mut normal = Vec3::default();
    let len = points.len();

    for i in 0..len {
        let current = points[i];
        let next = points[(i + 1) % len];

        normal += Vec3::new(
            (current.y - next.y) * (current.z + next.z),
            (current.z - next.z) * (current.x + next.x),
            (current.x - next.x) * (current.y + next.y),
        );
    }

    normal
}

/// Whether `p1` and `p2` lie on the same side of the line through `a` and `b`.
fn same_side(p1: Vec3, p2: Vec3, a: Vec3, b: Vec3) -> bool {
    let cp1 = (b - a).cross(p1 - a);
    let cp2 = (b - a).cross(p2 - a);
    cp1.dot(cp2) >= 0.0
}

/// Whether `point` lies inside or on the triangle `(a, b, c)`.
fn in_triangle(point: Vec3, a: Vec3, b: Vec3, c: Vec3) -> bool {
    let within_prism =
        same_side(point, a, b, c) && same_side(point, b, a, c) && same_side(point, c, a, b);
    if !within_prism {
        return false;
    }

    let normal = (b - a).cross(c - a);
    if normal.magnitude() == 0.0 {
        return false;
    }

    let scale = (b - a).magnitude().max((c - a).magnitude()).max(1.0);
    (point - a).project(normal).magnitude() <= PLANE_TOLERANCE * scale
}
