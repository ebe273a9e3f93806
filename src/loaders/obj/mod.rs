//! Wavefront OBJ/MTL ingestion: parses geometry text into triangulated,
//! material-bound meshes.

mod error;
mod face;
mod index;
mod parse_mtl;
mod parse_obj;
mod tokenize;
mod triangulate;
mod types;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

pub use error::{LoadError, Result};
pub use face::{assemble_face, AttributePools, CornerRef, CornerShape};
pub use index::resolve_index;
pub use parse_mtl::{load_materials, parse_materials};
pub use parse_obj::{load_file, load_file_with_options, load_str};
pub use tokenize::{first_token, split, tail};
pub use triangulate::triangulate;
pub use types::{
    EarFilter, LoadOptions, LoadResult, Material, Mesh, NormalFallback, TextureMaps, Vertex,
};

/// Opens `path` for line reading after checking its extension. Anything that
/// is not a readable regular file is `FileNotFound`.
fn open_with_extension(path: &Path, expected: &'static str) -> Result<BufReader<File>> {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected));
    if !matches {
        return Err(LoadError::WrongExtension {
            path: path.to_path_buf(),
            expected,
        });
    }

    let not_found = |source| LoadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(not_found)?;
    // Opening a directory succeeds on Unix; only the first read fails.
    if !file.metadata().map_err(not_found)?.is_file() {
        return Err(not_found(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    Ok(BufReader::new(file))
}
