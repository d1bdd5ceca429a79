//! CSV export of the session history.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::fs::atomic_write;
use crate::session::Record;

/// File name used when exporting into a directory.
pub const EXPORT_FILE_NAME: &str = "student_records.csv";

/// Serializes the history as UTF-8 CSV with an `input,output` header row.
pub fn to_csv(history: &[Record]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // Written explicitly so an empty history still produces a header.
    writer
        .write_record(["input", "output"])
        .context("Failed to write CSV header")?;
    for record in history {
        writer
            .write_record([record.input.as_str(), record.output.as_str()])
            .context("Failed to write CSV row")?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV data: {}", e.error()))
}

/// Parses CSV produced by [`to_csv`] back into records.
pub fn from_csv(data: &[u8]) -> Result<Vec<Record>> {
    let mut reader = csv::Reader::from_reader(data);
    reader
        .deserialize()
        .collect::<Result<Vec<Record>, _>>()
        .context("Failed to parse exported CSV")
}

/// Resolves where an export should be written.
///
/// A directory receives [`EXPORT_FILE_NAME`]; any other path is used as-is.
pub fn resolve_target(target: Option<&Path>) -> PathBuf {
    match target {
        None => PathBuf::from(EXPORT_FILE_NAME),
        Some(path) if path.is_dir() => path.join(EXPORT_FILE_NAME),
        Some(path) => path.to_path_buf(),
    }
}

/// Writes the history as CSV and returns the written path.
pub fn export_history(history: &[Record], target: Option<&Path>) -> Result<PathBuf> {
    if history.is_empty() {
        bail!("There are no records to export yet");
    }

    let path = resolve_target(target);
    let data = to_csv(history)?;
    atomic_write(&path, &data)?;

    tracing::info!(path = %path.display(), rows = history.len(), "exported history");
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("그룹 활동에서 적극적으로 참여함", "1. 성취 수준 분석\n..."),
            Record::new("says \"hi\", then leaves", "plain"),
        ]
    }

    #[test]
    fn test_to_csv_has_header_and_rows() {
        let data = to_csv(&sample()).unwrap();
        let text = String::from_utf8(data).unwrap();

        assert!(text.starts_with("input,output\n"));
        assert!(text.contains("\"1. 성취 수준 분석\n...\""));
        assert!(text.contains("\"says \"\"hi\"\", then leaves\",plain"));
    }

    #[test]
    fn test_to_csv_empty_history_is_header_only() {
        let data = to_csv(&[]).unwrap();
        assert_eq!(data, b"input,output\n");
    }

    #[test]
    fn test_from_csv_round_trip() {
        let history = sample();
        let parsed = from_csv(&to_csv(&history).unwrap()).unwrap();
        assert_eq!(parsed, history);
    }

    #[test]
    fn test_resolve_target_default() {
        assert_eq!(resolve_target(None), PathBuf::from(EXPORT_FILE_NAME));
    }

    #[test]
    fn test_resolve_target_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(
            resolve_target(Some(temp_dir.path())),
            temp_dir.path().join(EXPORT_FILE_NAME)
        );
    }

    #[test]
    fn test_resolve_target_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mine.csv");
        assert_eq!(resolve_target(Some(&path)), path);
    }

    #[test]
    fn test_export_history_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = export_history(&sample(), Some(temp_dir.path())).unwrap();

        assert_eq!(path, temp_dir.path().join(EXPORT_FILE_NAME));
        let parsed = from_csv(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_export_history_refuses_empty() {
        let temp_dir = TempDir::new().unwrap();
        let result = export_history(&[], Some(temp_dir.path()));

        assert!(result.is_err());
        assert!(!temp_dir.path().join(EXPORT_FILE_NAME).exists());
    }
}
