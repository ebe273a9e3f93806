pub mod app;
pub mod loaders;
pub mod math;
pub mod scene;

pub use loaders::obj::{load_file, load_materials, LoadError, LoadOptions, LoadResult};
