//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file is created next to the target so the rename stays on one
/// filesystem.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write file: {}", temp_path.display()))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e)
            .with_context(|| format!("Failed to move file into place: {}", path.display()));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.csv");

        atomic_write(&file_path, b"input,output\n").unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b"input,output\n");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.csv");

        fs::write(&file_path, "old").unwrap();
        atomic_write(&file_path, "new".as_bytes()).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
        assert!(!temp_dir.path().join(".records.csv.tmp").exists());
    }

    #[test]
    fn test_atomic_write_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("records.csv");

        let result = atomic_write(&file_path, b"x");
        assert!(result.is_err());
    }

    #[test]
    fn test_atomic_write_failed_rename_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be replaced by a file, so the rename fails.
        let file_path = temp_dir.path().join("records.csv");
        fs::create_dir(&file_path).unwrap();
        fs::write(file_path.join("keep"), "x").unwrap();

        let result = atomic_write(&file_path, b"input,output\n");

        assert!(result.is_err());
        assert!(!temp_dir.path().join(".records.csv.tmp").exists());
    }
}
