use std::fmt;

use crate::loaders::obj::LoadError;

#[derive(Debug)]
pub enum AppError {
    Cli(String),
    Load(LoadError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Cli(message) => write!(f, "{}", message),
            AppError::Load(error) => write!(f, "failed to load model: {}", error),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Cli(_) => None,
            AppError::Load(error) => Some(error),
        }
    }
}

impl From<LoadError> for AppError {
    fn from(error: LoadError) -> Self {
        AppError::Load(error)
    }
}
