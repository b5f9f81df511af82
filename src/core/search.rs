//! Manifest searches over the directory tree.
//!
//! - [`search_upward`] walks from a directory toward the filesystem root
//!   and stops at the first manifest it sees (closest ancestor wins).
//! - [`search_downward`] walks every descendant of a directory and
//!   collects every manifest below it.
//! - [`owned_dirs`] walks a module root and collects the directories
//!   that belong to it, stopping at nested module roots.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::errors::{NmodError, NmodResult};
use crate::core::manifest::ManifestRef;
use crate::util::config::ScanConfig;

/// Check whether `path` is a manifest file, following a symlink to it.
///
/// Upward and downward searches both go through here, so they agree on
/// what counts: a regular file, or a symlink resolving to one.
fn is_manifest_file(path: &Path) -> NmodResult<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if is_absent(&e) => Ok(false),
        Err(e) => Err(NmodError::io(path, e)),
    }
}

/// Check whether `dir` directly holds a manifest file.
fn manifest_in(dir: &Path, scan: &ScanConfig) -> NmodResult<Option<PathBuf>> {
    let candidate = dir.join(&scan.manifest_name);
    Ok(is_manifest_file(&candidate)?.then_some(candidate))
}

fn is_absent(e: &io::Error) -> bool {
    // NotADirectory: a file sits where a directory was expected.
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Canonical path of a manifest found at `path`.
///
/// Only the parent directory is resolved; a symlinked manifest keeps the
/// directory it sits in as its module root.
fn canonical_manifest(path: &Path) -> NmodResult<ManifestRef> {
    let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
        return Ok(ManifestRef::new(path));
    };
    let dir = dir.canonicalize().map_err(|e| NmodError::io(dir, e))?;
    Ok(ManifestRef::new(dir.join(name)))
}

/// Search `start` and each of its ancestors for a manifest.
///
/// `start` must be absolute; see [`crate::util::fs::normalize_path`].
/// Returns `Ok(None)` once the filesystem root has been checked without
/// finding one.
pub fn search_upward(start: &Path, scan: &ScanConfig) -> NmodResult<Option<ManifestRef>> {
    debug_assert!(start.is_absolute(), "upward search starts from an absolute path");

    let mut current = start.to_path_buf();
    loop {
        if let Some(path) = manifest_in(&current, scan)? {
            tracing::debug!("found {} above {}", path.display(), start.display());
            return Ok(Some(canonical_manifest(&path)?));
        }
        if !current.pop() {
            tracing::debug!("no {} above {}", scan.manifest_name, start.display());
            return Ok(None);
        }
    }
}

/// Collect every manifest in `start` and all directories below it.
///
/// Any error during the walk aborts the whole search.
pub fn search_downward(start: &Path, scan: &ScanConfig) -> NmodResult<BTreeSet<ManifestRef>> {
    let mut found = BTreeSet::new();
    let mut walker = WalkDir::new(start).follow_links(scan.follow_links).into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| NmodError::walk(start, e))?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            if entry.depth() > 0 && is_ignored(&entry, scan) {
                tracing::trace!("skipping ignored {}", entry.path().display());
                walker.skip_current_dir();
            }
            continue;
        }

        if entry.file_name() == scan.manifest_name.as_str() && is_manifest_file(entry.path())? {
            found.insert(canonical_manifest(entry.path())?);
        }
    }

    tracing::debug!(
        "found {} {} file(s) below {}",
        found.len(),
        scan.manifest_name,
        start.display()
    );
    Ok(found)
}

/// Collect the directories owned by the module rooted at `root`.
///
/// `root` itself is always included. A subdirectory holding its own
/// manifest belongs to a nested module, so it and everything beneath it
/// are left out.
pub fn owned_dirs(root: &Path, scan: &ScanConfig) -> NmodResult<BTreeSet<PathBuf>> {
    let mut dirs = BTreeSet::new();
    let mut walker = WalkDir::new(root).follow_links(scan.follow_links).into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| NmodError::walk(root, e))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        if entry.depth() > 0 {
            if is_ignored(&entry, scan) {
                walker.skip_current_dir();
                continue;
            }
            if manifest_in(entry.path(), scan)?.is_some() {
                tracing::trace!("{} starts a nested module", entry.path().display());
                walker.skip_current_dir();
                continue;
            }
        }

        dirs.insert(entry.into_path());
    }

    Ok(dirs)
}

fn is_ignored(entry: &walkdir::DirEntry, scan: &ScanConfig) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| scan.is_ignored(name))
}
