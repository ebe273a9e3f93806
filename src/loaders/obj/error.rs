use std::path::PathBuf;

use thiserror::Error;

/// Result type for OBJ and MTL loading.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors raised while loading a geometry file or its material library.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{}': {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' must have a .{expected} extension", path.display())]
    WrongExtension { path: PathBuf, expected: &'static str },

    #[error("line {line}: malformed '{directive}' directive: {message}")]
    MalformedLine {
        line: usize,
        directive: String,
        message: String,
    },

    #[error("line {line}: {kind} index {index} is out of bounds (count={len})")]
    UnresolvedIndex {
        line: usize,
        kind: &'static str,
        index: i64,
        len: usize,
    },

    #[error("'{}' contains no geometry", path.display())]
    EmptyModel { path: PathBuf },

    #[error("'{}' declares no materials", path.display())]
    EmptyMaterialSet { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub(crate) fn malformed(line: usize, directive: &str, message: impl Into<String>) -> Self {
        LoadError::MalformedLine {
            line,
            directive: directive.to_string(),
            message: message.into(),
        }
    }
}
