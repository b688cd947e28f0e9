use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::types::HistoryEntry;
use super::HistoryError;

pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn load_entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            // A log that does not exist yet is just empty
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HistoryError::Open(self.file_path.clone(), e)),
        };
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| HistoryError::Read(self.file_path.clone(), e))?;
            if let Some(entry) = HistoryEntry::parse(&line) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    pub fn append_entry(&self, entry: &HistoryEntry) -> Result<(), HistoryError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)
            .map_err(|e| HistoryError::Open(self.file_path.clone(), e))?;

        // One write per record, so concurrent appenders can interleave
        // lines but not the bytes within one
        let record = format!("{}\t{}\n", entry.key, entry.path);
        file.write_all(record.as_bytes())
            .map_err(|e| HistoryError::Write(self.file_path.clone(), e))?;
        Ok(())
    }
}
