use std::path::{Path, PathBuf};

/// Resolve the input path, falling back to the `input/` directory.
///
/// When the given path does not exist, look for a file with the same base
/// name under `input/` instead. The fallback path is returned without an
/// existence check; a missing file surfaces as a read error with the
/// fallback's name.
pub fn resolve_input_path(path: &Path) -> PathBuf {
    if path.exists() {
        return path.to_path_buf();
    }
    match path.file_name() {
        Some(name) => Path::new("input").join(name),
        None => path.to_path_buf(),
    }
}
