use crate::loaders::obj::Vertex;

/// Midpoint of the axis-aligned bounding box of `vertices`; origin when empty.
pub fn center_all_axes(vertices: &[Vertex]) -> (f32, f32, f32) {
    let (min_x, max_x) = min_max_axis(vertices, |v| v.position.x).unwrap_or((0.0, 0.0));
    let (min_y, max_y) = min_max_axis(vertices, |v| v.position.y).unwrap_or((0.0, 0.0));
    let (min_z, max_z) = min_max_axis(vertices, |v| v.position.z).unwrap_or((0.0, 0.0));

    (
        center_from_range(min_x, max_x),
        center_from_range(min_y, max_y),
        center_from_range(min_z, max_z),
    )
}

fn min_max_axis<F>(vertices: &[Vertex], axis_fn: F) -> Option<(f32, f32)>
where
    F: Fn(&Vertex) -> f32,
{
    vertices.iter().fold(None, |acc, vertex| {
        let value = axis_fn(vertex);
        match acc {
            Some((min, max)) => Some((f32::min(min, value), f32::max(max, value))),
            None => Some((value, value)),
        }
    })
}

fn center_from_range(min: f32, max: f32) -> f32 {
    (min + max) * 0.5
}
