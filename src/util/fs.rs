//! Filesystem utilities.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` and normalize it.
///
/// Existing paths are canonicalized by the OS. Paths that don't exist
/// (yet) are normalized lexically so `..` steps still resolve.
pub fn normalize_path(base: &Path, path: &Path) -> io::Result<PathBuf> {
    let joined = base.join(path);
    match joined.canonicalize() {
        Ok(canonical) => Ok(canonical),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(normalize_lexically(&joined)),
        Err(e) => Err(e),
    }
}

/// Normalize `.` and `..` components without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    match pathdiff::diff_paths(path, base) {
        Some(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Some(rel) => rel,
        None => path.to_path_buf(),
    }
}
