//! Loading the text to summarize from the local filesystem.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Validate the user-supplied input path; only a missing or empty path is rejected
pub fn resolve_input_path(raw: Option<&str>) -> Result<PathBuf> {
    match raw {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(Error::MissingInputPath),
    }
}

/// Read the whole file as text
///
/// Invalid UTF-8 sequences are replaced rather than rejected; the model only
/// ever sees text.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Input is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_input_path() {
        assert_eq!(resolve_input_path(Some("a.txt")).unwrap(), PathBuf::from("a.txt"));
        assert!(matches!(resolve_input_path(None), Err(Error::MissingInputPath)));
        assert!(matches!(resolve_input_path(Some("")), Err(Error::MissingInputPath)));
        assert_eq!(resolve_input_path(Some("   ")).unwrap(), PathBuf::from("   "));
    }

    #[test]
    fn test_read_source_returns_content_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("article.txt");
        std::fs::write(&path, "Hello world.\r\nSegunda línea ñ\n").unwrap();

        assert_eq!(read_source(&path).unwrap(), "Hello world.\r\nSegunda línea ñ\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match read_source(&path).unwrap_err() {
            Error::FileRead { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_whitespace_path_is_a_read_error() {
        let path = resolve_input_path(Some(" ")).unwrap();
        assert!(matches!(read_source(&path), Err(Error::FileRead { .. })));
    }

    #[test]
    fn test_read_source_lossy_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xe9").unwrap();

        assert_eq!(read_source(&path).unwrap(), "caf\u{FFFD}");
    }
}
