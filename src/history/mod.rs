mod file_ops;
mod types;

pub use types::HistoryEntry;

use std::path::{Path, PathBuf};

use self::file_ops::FileOps;

#[derive(Debug)]
pub enum HistoryError {
    Open(PathBuf, std::io::Error),
    Read(PathBuf, std::io::Error),
    Write(PathBuf, std::io::Error),
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Open(path, e) => {
                write!(f, "unable to open history file '{}': {}", path.display(), e)
            }
            HistoryError::Read(path, e) => {
                write!(f, "failed to read history file '{}': {}", path.display(), e)
            }
            HistoryError::Write(path, e) => write!(
                f,
                "failed to write to history file '{}': {}",
                path.display(),
                e
            ),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Append-only key-to-path log. Records are never rewritten; a repeated
/// key shadows its older records (lookup scans newest first).
pub struct History {
    entries: Vec<HistoryEntry>,
    file_ops: Option<FileOps>,
}

impl History {
    pub fn load(file_path: PathBuf) -> Result<Self, HistoryError> {
        let file_ops = FileOps::new(file_path);
        let entries = file_ops.load_entries()?;

        Ok(History {
            entries,
            file_ops: Some(file_ops),
        })
    }

    /// File-backed but starting from nothing; appends still reach the log.
    pub fn empty(file_path: PathBuf) -> Self {
        History {
            entries: Vec::new(),
            file_ops: Some(FileOps::new(file_path)),
        }
    }

    /// No backing file; records live only for this run.
    pub fn detached() -> Self {
        History {
            entries: Vec::new(),
            file_ops: None,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_ops.as_ref().map(FileOps::file_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.key == key)
            .map(|entry| entry.path.as_str())
    }

    pub fn remember(&mut self, key: &str, path: &str) -> Result<(), HistoryError> {
        if key.is_empty() {
            return Ok(());
        }

        let entry = HistoryEntry::new(key, path);
        if let Some(file_ops) = &self.file_ops {
            file_ops.append_entry(&entry)?;
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Records the key itself, then the final path segment as a second
    /// key for the same path, unless that segment is empty or already
    /// the key.
    pub fn remember_aliases(&mut self, key: &str, path: &str) -> Result<(), HistoryError> {
        self.remember(key, path)?;

        if let Some(alias) = final_segment(path) {
            if alias != key {
                self.remember(alias, path)?;
            }
        }
        Ok(())
    }
}

fn final_segment(path: &str) -> Option<&str> {
    let segment = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn history_in(dir: &TempDir) -> PathBuf {
        dir.path().join(".chdir_history")
    }

    fn read_log(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let history = History::load(history_in(&dir)).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let path = history_in(&dir);
        fs::write(
            &path,
            "proj\t/home/alice/code/proj\nno tab here\nempty\t\n\t/kept/empty/key\n",
        )
        .unwrap();

        let history = History::load(path).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.lookup("proj"), Some("/home/alice/code/proj"));
        assert_eq!(history.lookup(""), Some("/kept/empty/key"));
        assert_eq!(history.lookup("empty"), None);
    }

    #[test]
    fn test_lookup_last_write_wins() {
        let dir = TempDir::new().unwrap();
        let path = history_in(&dir);
        fs::write(&path, "proj\t/old/proj\nother\t/tmp\nproj\t/new/proj\n").unwrap();

        let history = History::load(path).unwrap();
        assert_eq!(history.lookup("proj"), Some("/new/proj"));
        assert_eq!(history.lookup("other"), Some("/tmp"));
        assert_eq!(history.lookup("missing"), None);
    }

    #[test]
    fn test_remember_appends_to_log() {
        let dir = TempDir::new().unwrap();
        let path = history_in(&dir);

        let mut history = History::empty(path.clone());
        history.remember("proj", "/home/alice/code/proj").unwrap();

        assert_eq!(read_log(&path), vec!["proj\t/home/alice/code/proj"]);
        assert_eq!(history.lookup("proj"), Some("/home/alice/code/proj"));

        // A fresh load sees the same record
        let reloaded = History::load(path).unwrap();
        assert_eq!(reloaded.lookup("proj"), Some("/home/alice/code/proj"));
    }

    #[test]
    fn test_remember_aliases_records_basename_too() {
        let dir = TempDir::new().unwrap();
        let path = history_in(&dir);

        let mut history = History::empty(path.clone());
        history
            .remember_aliases("work", "/home/alice/code/proj")
            .unwrap();

        assert_eq!(
            read_log(&path),
            vec![
                "work\t/home/alice/code/proj",
                "proj\t/home/alice/code/proj"
            ]
        );
    }

    #[test]
    fn test_remember_aliases_skips_alias_equal_to_key() {
        let dir = TempDir::new().unwrap();
        let path = history_in(&dir);

        let mut history = History::empty(path.clone());
        history
            .remember_aliases("proj", "/home/alice/code/proj")
            .unwrap();

        assert_eq!(read_log(&path), vec!["proj\t/home/alice/code/proj"]);
    }

    #[test]
    fn test_remember_aliases_skips_empty_alias() {
        let dir = TempDir::new().unwrap();
        let path = history_in(&dir);

        let mut history = History::empty(path.clone());
        history.remember_aliases("root", "/").unwrap();

        assert_eq!(read_log(&path), vec!["root\t/"]);
    }

    #[test]
    fn test_remember_empty_key_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = history_in(&dir);

        let mut history = History::empty(path.clone());
        history.remember("", "/tmp").unwrap();

        assert!(history.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_detached_history_never_touches_disk() {
        let mut history = History::detached();
        history.remember_aliases("proj", "/home/alice/proj").unwrap();

        assert_eq!(history.lookup("proj"), Some("/home/alice/proj"));
        assert_eq!(history.file_path(), None);
    }

    #[test]
    fn test_remember_surfaces_write_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join(".chdir_history");

        let mut history = History::empty(path);
        let result = history.remember("proj", "/tmp");
        assert!(matches!(result, Err(HistoryError::Open(_, _))));
    }

    #[test]
    fn test_final_segment() {
        assert_eq!(final_segment("/home/alice/proj"), Some("proj"));
        assert_eq!(final_segment("proj"), Some("proj"));
        assert_eq!(final_segment("/"), None);
        assert_eq!(final_segment("/home/alice/"), None);
    }
}
