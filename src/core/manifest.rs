//! go.mod manifest references and module declaration parsing.
//!
//! nmod only cares about one line of a manifest: the `module <name>`
//! declaration. Everything else in the file is ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::core::errors::{NmodError, NmodResult};

/// Default manifest file name.
pub const MANIFEST_NAME: &str = "go.mod";

/// A line holding `module`, a blank run, and the module name.
static MODULE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*module[ \t]+(\S[^\r\n]*?)[ \t\r]*$").expect("valid module regex")
});

/// Extract the module name from raw manifest contents.
///
/// The first declaration wins; later ones are ignored. Bytes that are
/// not UTF-8 elsewhere in the file don't prevent a match.
pub fn parse_module_name(contents: &[u8]) -> Option<String> {
    MODULE_DECL
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
}

/// Read the manifest at `path` and return its declared module name.
pub fn read_module_name(path: &Path) -> NmodResult<String> {
    let contents = fs::read(path).map_err(|e| NmodError::io(path, e))?;

    parse_module_name(&contents).ok_or_else(|| NmodError::NoDeclaration {
        path: path.to_path_buf(),
    })
}

/// Absolute path of a manifest file found during a search.
///
/// Ordering and equality are those of the path, so a set of references
/// deduplicates manifests reached more than once.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManifestRef {
    path: PathBuf,
}

impl ManifestRef {
    /// Wrap an already-absolute manifest path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug_assert!(path.is_absolute(), "manifest paths are absolute");
        ManifestRef { path }
    }

    /// Path of the manifest file itself.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the manifest, i.e. the module root.
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }

    /// Read the declared module name.
    pub fn read_module_name(&self) -> NmodResult<String> {
        read_module_name(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(contents: &str) -> Option<String> {
        parse_module_name(contents.as_bytes())
    }

    #[test]
    fn test_parse_simple_declaration() {
        let contents = "module example.com/foo\n\ngo 1.21\n";
        assert_eq!(parse(contents).as_deref(), Some("example.com/foo"));
    }

    #[test]
    fn test_parse_trims_trailing_whitespace() {
        assert_eq!(
            parse("module   example.com/foo  \r\ngo 1.21\r\n").as_deref(),
            Some("example.com/foo")
        );
        assert_eq!(parse("module\texample.com/tab").as_deref(), Some("example.com/tab"));
    }

    #[test]
    fn test_parse_first_declaration_wins() {
        let contents = "module first.example\nmodule second.example\n";
        assert_eq!(parse(contents).as_deref(), Some("first.example"));
    }

    #[test]
    fn test_parse_ignores_non_declarations() {
        assert_eq!(parse("go 1.21\nrequire foo v1.0.0\n"), None);
        assert_eq!(parse("// module commented.out\n"), None);
        assert_eq!(parse("modules foo\n"), None);
        assert_eq!(parse("module   \n"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_parse_skips_leading_comment_lines() {
        let contents = "// Deprecated: use v2.\nmodule example.com/old\n";
        assert_eq!(parse(contents).as_deref(), Some("example.com/old"));
    }

    #[test]
    fn test_read_module_name_with_non_utf8_bytes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_NAME);
        fs::write(&path, b"module example.com/foo\n\n// caf\xe9\n").unwrap();

        assert_eq!(read_module_name(&path).unwrap(), "example.com/foo");
    }

    #[test]
    fn test_read_module_name_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_NAME);
        fs::write(&path, "module example.com/foo\n").unwrap();

        assert_eq!(read_module_name(&path).unwrap(), "example.com/foo");
    }

    #[test]
    fn test_read_module_name_without_declaration() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_NAME);
        fs::write(&path, "go 1.21\n").unwrap();

        let err = read_module_name(&path).unwrap_err();
        assert!(matches!(err, NmodError::NoDeclaration { .. }));
    }

    #[test]
    fn test_read_module_name_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_module_name(&tmp.path().join(MANIFEST_NAME)).unwrap_err();
        assert!(matches!(err, NmodError::Io { .. }));
    }

    #[test]
    fn test_manifest_ref_root() {
        let tmp = TempDir::new().unwrap();
        let manifest = ManifestRef::new(tmp.path().join("svc").join(MANIFEST_NAME));
        assert_eq!(manifest.root(), tmp.path().join("svc"));
    }
}
