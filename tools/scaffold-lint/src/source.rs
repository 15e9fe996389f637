use std::fs;
use std::path::Path;

use crate::error::ReadError;

/// Read a whole file as UTF-8 text. The handle is closed before this returns,
/// on success and on failure alike.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");
    String::from_utf8(bytes).map_err(|source| ReadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReadErrorKind;

    #[test]
    fn reads_utf8_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.dart");
        fs::write(&path, "import 'dart:core';\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "import 'dart:core';\n");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("nope.dart")).unwrap_err();
        assert_eq!(err.kind(), ReadErrorKind::Io);
    }

    #[test]
    fn invalid_utf8_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.dart");
        fs::write(&path, [b'c', 0xe9, b'\n']).unwrap();
        let err = read_text(&path).unwrap_err();
        assert_eq!(err.kind(), ReadErrorKind::Decode);
    }
}
