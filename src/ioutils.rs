use std::path::Path;

use crate::error::{Error, Result};

/// Creates a directory and any missing parents. Existing directories are left as they are.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, truncating any existing file.
///
/// The parent directory must already exist; a missing parent is reported as an error
/// rather than created on the fly.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    std::fs::write(dest_path.as_ref(), content).map_err(Error::IoError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/c");
        create_dir_all(&nested).unwrap();
        create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn write_file_truncates_existing_content() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("file.txt");
        write_file("a much longer original body", &target).unwrap();
        write_file("short", &target).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "short");
    }

    #[test]
    fn write_file_fails_without_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("missing/file.txt");
        assert!(matches!(write_file("x", &target), Err(Error::IoError(_))));
    }
}
