use super::error::{LoadError, Result};

pub fn parse_f32_component(raw: &str, line_number: usize, directive: &str, label: &str) -> Result<f32> {
    raw.parse::<f32>().map_err(|error| {
        LoadError::malformed(
            line_number,
            directive,
            format!("invalid {} '{}': {}", label, raw, error),
        )
    })
}

/// Parses the numeric arguments of `v`, `vt` or `vn`.
///
/// `required` values must be present; up to `optional` trailing values are
/// parsed for validity and dropped.
pub fn parse_components(
    fields: &[&str],
    required: usize,
    optional: usize,
    line_number: usize,
    directive: &str,
) -> Result<Vec<f32>> {
    if fields.len() < required || fields.len() > required + optional {
        let expected = if optional == 0 {
            format!("{}", required)
        } else {
            format!("{} to {}", required, required + optional)
        };
        return Err(LoadError::malformed(
            line_number,
            directive,
            format!("expected {} values, found {}", expected, fields.len()),
        ));
    }

    let mut values = Vec::with_capacity(fields.len());
    for (slot, raw) in fields.iter().enumerate() {
        let label = format!("component {}", slot + 1);
        values.push(parse_f32_component(raw, line_number, directive, &label)?);
    }
    values.truncate(required);
    Ok(values)
}

/// Resolves a 1-based or negative-relative OBJ index against `pool`.
///
/// A negative index counts back from the pool's length at the time of the
/// call, so relative references see only elements declared above the face.
pub fn resolve_index<T: Copy>(
    raw: &str,
    pool: &[T],
    line_number: usize,
    kind: &'static str,
) -> Result<T> {
    let parsed = raw.parse::<i64>().map_err(|error| {
        LoadError::malformed(
            line_number,
            "f",
            format!("invalid {} index '{}': {}", kind, raw, error),
        )
    })?;

    let len = pool.len() as i64;
    let resolved = if parsed > 0 { parsed - 1 } else { len + parsed };

    if parsed == 0 || resolved < 0 || resolved >= len {
        return Err(LoadError::UnresolvedIndex {
            line: line_number,
            kind,
            index: parsed,
            len: pool.len(),
        });
    }

    Ok(pool[resolved as usize])
}
