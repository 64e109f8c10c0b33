pub mod paths;

pub use paths::resolve_input_path;
