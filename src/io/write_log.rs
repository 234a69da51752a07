use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

/// Self-documenting header written at the top of a new write-error log.
const FILE_HEADER: &str = "\
# tick write-error log — append-only
# Each line is a save that never reached items.json.
# The in-memory list kept going; re-save by making any change.
# Safe to delete.
";

/// Return the path to the write-error log file.
pub fn write_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(".write-errors.log")
}

/// Append a save failure to the log. Best-effort: if the log itself can't
/// be written there is nowhere left to report, so the error is dropped.
pub fn log_save_failure(data_dir: &Path, detail: &str) {
    let path = write_log_path(data_dir);
    let is_new = !path.exists();

    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    if is_new {
        let _ = file.write_all(FILE_HEADER.as_bytes());
    }
    let line = format!("{}  save failed: {}\n", Utc::now().to_rfc3339(), detail);
    let _ = file.write_all(line.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn first_entry_writes_header() {
        let dir = TempDir::new().unwrap();
        log_save_failure(dir.path(), "disk full");

        let content = fs::read_to_string(write_log_path(dir.path())).unwrap();
        assert!(content.starts_with("# tick write-error log"));
        assert!(content.contains("save failed: disk full"));
    }

    #[test]
    fn entries_append_in_order() {
        let dir = TempDir::new().unwrap();
        log_save_failure(dir.path(), "first");
        log_save_failure(dir.path(), "second");

        let content = fs::read_to_string(write_log_path(dir.path())).unwrap();
        let first = content.find("save failed: first").unwrap();
        let second = content.find("save failed: second").unwrap();
        assert!(first < second);
        // Header appears exactly once
        assert_eq!(content.matches("# tick write-error log").count(), 1);
    }

    #[test]
    fn missing_directory_is_swallowed() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("never-created");
        // Must not panic or create anything
        log_save_failure(&gone, "nope");
        assert!(!gone.exists());
    }
}
