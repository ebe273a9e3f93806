use std::fs::File;
use std::path::Path;

use crate::loaders::obj::{EarFilter, LoadOptions, NormalFallback};

const USAGE_FLAGS: &str =
    "[--whole-face-normals | --missing-normals-only] [--unfiltered-ears] [--flip-v]";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model_path: String,
    pub options: LoadOptions,
}

pub fn parse_from_env() -> Result<AppConfig, String> {
    let args = std::env::args().collect::<Vec<String>>();
    parse_args(&args)
}

/// Parses `args` as `<program> <model.obj> [flags]`.
pub fn parse_args(args: &[String]) -> Result<AppConfig, String> {
    let program = args.first().map(|s| s.as_str()).unwrap_or("obj_ingest");
    let usage = || {
        format!(
            "Usage: {} <path_to_model> {}\nExample: cargo run -- resources/models/teapot.obj --flip-v",
            program, USAGE_FLAGS
        )
    };

    let mut model_path = None;
    let mut options = LoadOptions::default();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--whole-face-normals" => options.normal_fallback = NormalFallback::WholeFace,
            "--missing-normals-only" => options.normal_fallback = NormalFallback::MissingOnly,
            "--unfiltered-ears" => options.ear_filter = EarFilter::Unfiltered,
            "--flip-v" => options.flip_texcoord_v = true,
            flag if flag.starts_with("--") => {
                return Err(format!("unknown option '{}'\n{}", flag, usage()));
            }
            path if model_path.is_none() => model_path = Some(path.to_string()),
            _ => return Err(usage()),
        }
    }

    let model_path = model_path.ok_or_else(usage)?;
    validate_path(&model_path, "obj", "model")?;
    Ok(AppConfig {
        model_path,
        options,
    })
}

fn validate_path(path: &str, expected_extension: &str, label: &str) -> Result<(), String> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        return Err(format!("{} file does not exist: {}", label, path));
    }
    if !file_path.is_file() {
        return Err(format!("{} path is not a file: {}", label, path));
    }

    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| format!("{} file has no extension: {}", label, path))?;
    if !extension.eq_ignore_ascii_case(expected_extension) {
        return Err(format!(
            "{} file must have .{} extension: {}",
            label, expected_extension, path
        ));
    }

    File::open(file_path)
        .map(|_| ())
        .map_err(|error| format!("Failed to open {} file '{}': {}", label, path, error))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::parse_args;
    use crate::loaders::obj::{EarFilter, NormalFallback};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_model_path_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("cube.obj");
        fs::write(&model, "v 0 0 0\n").unwrap();
        let model = model.to_str().unwrap();

        let config = parse_args(&args(&[
            "obj_ingest",
            model,
            "--missing-normals-only",
            "--unfiltered-ears",
            "--flip-v",
        ]))
        .unwrap();

        assert_eq!(config.model_path, model);
        assert_eq!(config.options.normal_fallback, NormalFallback::MissingOnly);
        assert_eq!(config.options.ear_filter, EarFilter::Unfiltered);
        assert!(config.options.flip_texcoord_v);
    }

    #[test]
    fn missing_model_path_prints_usage() {
        let error = parse_args(&args(&["obj_ingest"])).unwrap_err();
        assert!(error.starts_with("Usage: obj_ingest"));
    }

    #[test]
    fn rejects_unknown_flags_and_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("cube.stl");
        fs::write(&model, "solid\n").unwrap();
        let model = model.to_str().unwrap();

        assert!(parse_args(&args(&["obj_ingest", model, "--fast"]))
            .unwrap_err()
            .contains("unknown option"));
        assert!(parse_args(&args(&["obj_ingest", model]))
            .unwrap_err()
            .contains("must have .obj extension"));
    }

    #[test]
    fn rejects_nonexistent_model() {
        let error = parse_args(&args(&["obj_ingest", "/definitely/not/here.obj"])).unwrap_err();
        assert!(error.contains("does not exist"));
    }
}
