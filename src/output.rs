use crate::error::{DirectoryError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Replaces `path` with `contents` in one step: the bytes go to a temporary
/// file in the same directory, which is then renamed over the destination.
/// On failure the temporary file is dropped and the old destination stays.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| DirectoryError::io(path, e))?;
    tmp.write_all(contents)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| DirectoryError::io(path, e))?;
    debug!("Wrote {} bytes to {}", contents.len(), tmp.path().display());

    tmp.persist(path).map_err(|e| DirectoryError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, b"new contents").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new contents");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");

        let err = write_atomic(&path, b"x").unwrap_err();

        assert!(matches!(err, DirectoryError::Io { .. }));
        assert!(!path.exists());
    }
}
