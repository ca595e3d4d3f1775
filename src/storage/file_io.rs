//! File I/O utilities with atomic writes
//!
//! Reads are lenient: a missing or unparseable file yields the typed empty
//! fallback instead of an error, so corrupt state degrades to a fresh start
//! rather than a crash. Writes go through a temp file and rename so the
//! target is either completely written or not modified at all.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::DuitError;

/// Read JSON from a file, falling back to the default value
///
/// Missing files, unreadable files, and parse failures all produce
/// `T::default()`; none of them surface as errors.
pub fn read_json_lenient<T, P>(path: P) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let Ok(file) = File::open(path.as_ref()) else {
        return T::default();
    };
    serde_json::from_reader(BufReader::new(file)).unwrap_or_default()
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), DuitError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let io_err = |stage: &str, e: std::io::Error| {
        DuitError::Storage(format!("{} {}: {}", stage, path.display(), e))
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_err("Failed to create directory for", e))?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    {
        let file = File::create(&temp_path).map_err(|e| io_err("Failed to create temp for", e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| DuitError::Storage(format!("Failed to serialize {}: {}", path.display(), e)))?;
        writer.flush().map_err(|e| io_err("Failed to flush", e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| io_err("Failed to sync", e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        io_err("Failed to replace", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();

        let data: TestData = read_json_lenient(temp_dir.path().join("nonexistent.json"));
        assert_eq!(data, TestData::default());
    }

    #[test]
    fn test_read_corrupt_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        fs::write(&path, "not json at all").unwrap();

        let data: TestData = read_json_lenient(&path);
        assert_eq!(data, TestData::default());
    }

    #[test]
    fn test_write_and_read_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };
        write_json_atomic(&path, &data).unwrap();

        let loaded: TestData = read_json_lenient(&path);
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &TestData::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let first = TestData {
            name: "first".to_string(),
            value: 1,
        };
        write_json_atomic(&path, &first).unwrap();

        let second = TestData {
            name: "second".to_string(),
            value: 2,
        };
        write_json_atomic(&path, &second).unwrap();

        let loaded: TestData = read_json_lenient(&path);
        assert_eq!(loaded, second);
    }
}
